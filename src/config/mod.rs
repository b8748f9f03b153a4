//! Runtime configuration
//!
//! Credentials and the RPC endpoint come from the environment (with `.env`
//! file support); file locations come from the command line.

use std::path::PathBuf;
use thiserror::Error;

/// JSON-RPC endpoint of the target node.
pub const ENV_RPC_URL: &str = "RPC_URL";
/// Private key of the deployer / seller account.
pub const ENV_PRIVATE_KEY1: &str = "PRIVATE_KEY1";
/// Private key of the buyer account.
pub const ENV_PRIVATE_KEY2: &str = "PRIVATE_KEY2";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Everything a command needs to talk to the chain.
#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub seller_key: String,
    pub buyer_key: String,
    pub artifacts_dir: PathBuf,
    pub addresses_file: PathBuf,
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// A `.env` file in the working directory is merged in first; real
    /// environment variables take precedence.
    pub fn from_env(artifacts_dir: PathBuf, addresses_file: PathBuf) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(artifacts_dir, addresses_file, |name| {
            std::env::var(name).ok()
        })
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(
        artifacts_dir: PathBuf,
        addresses_file: PathBuf,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            rpc_url: require(&lookup, ENV_RPC_URL)?,
            seller_key: require(&lookup, ENV_PRIVATE_KEY1)?,
            buyer_key: require(&lookup, ENV_PRIVATE_KEY2)?,
            artifacts_dir,
            addresses_file,
        })
    }
}

fn require<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or(ConfigError::MissingVar(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (ENV_RPC_URL, "http://127.0.0.1:8545"),
            (ENV_PRIVATE_KEY1, "0x01"),
            (ENV_PRIVATE_KEY2, "0x02"),
        ])
    }

    fn build(vars: HashMap<&'static str, &'static str>) -> Result<Config, ConfigError> {
        Config::from_lookup(
            PathBuf::from("artifacts/contracts"),
            PathBuf::from("contract-addresses.json"),
            |name| vars.get(name).map(|v| v.to_string()),
        )
    }

    #[test]
    fn test_complete_environment() {
        let config = build(vars()).unwrap();

        assert_eq!(config.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(config.seller_key, "0x01");
        assert_eq!(config.buyer_key, "0x02");
    }

    #[test]
    fn test_missing_private_key_aborts() {
        let mut vars = vars();
        vars.remove(ENV_PRIVATE_KEY2);

        let err = build(vars).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ENV_PRIVATE_KEY2)));
    }

    #[test]
    fn test_missing_rpc_url_aborts() {
        let mut vars = vars();
        vars.remove(ENV_RPC_URL);

        let err = build(vars).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ENV_RPC_URL)));
    }
}
