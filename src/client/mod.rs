//! JSON-RPC client construction
//!
//! Builds one signing provider per account, mirroring the two wallets the
//! demo narrative needs (the seller, who also deploys, and the buyer).

pub mod revert;

pub use revert::{decode_error_string, revert_reason};

use crate::config::Config;
use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::{LocalSignerError, PrivateKeySigner};
use alloy::transports::http::reqwest::Url;
use thiserror::Error;

/// Client construction errors
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid RPC URL `{0}`")]
    InvalidUrl(String),
    #[error("invalid private key in {0}: {1}")]
    InvalidKey(&'static str, #[source] LocalSignerError),
}

/// The two signing accounts every flow runs with.
pub struct Accounts {
    pub seller: DynProvider,
    pub buyer: DynProvider,
    pub seller_address: Address,
    pub buyer_address: Address,
}

/// Connect both accounts to the configured node.
pub fn connect(config: &Config) -> Result<Accounts, ClientError> {
    let url = parse_url(&config.rpc_url)?;

    let (seller, seller_address) =
        signing_provider(&config.seller_key, crate::config::ENV_PRIVATE_KEY1, &url)?;
    let (buyer, buyer_address) =
        signing_provider(&config.buyer_key, crate::config::ENV_PRIVATE_KEY2, &url)?;

    log::debug!("seller account: {seller_address}");
    log::debug!("buyer account: {buyer_address}");

    Ok(Accounts {
        seller,
        buyer,
        seller_address,
        buyer_address,
    })
}

/// Connect without a signer, for read-only queries.
pub fn connect_read_only(rpc_url: &str) -> Result<DynProvider, ClientError> {
    let url = parse_url(rpc_url)?;
    Ok(ProviderBuilder::new().connect_http(url).erased())
}

fn parse_url(rpc_url: &str) -> Result<Url, ClientError> {
    rpc_url
        .parse()
        .map_err(|_| ClientError::InvalidUrl(rpc_url.to_string()))
}

fn signing_provider(
    key: &str,
    source: &'static str,
    url: &Url,
) -> Result<(DynProvider, Address), ClientError> {
    let signer: PrivateKeySigner = key
        .parse()
        .map_err(|e| ClientError::InvalidKey(source, e))?;
    let address = signer.address();

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(url.clone())
        .erased();

    Ok((provider, address))
}
