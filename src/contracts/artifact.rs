//! Compiled contract artifacts
//!
//! Loads Hardhat build output (`<dir>/<Name>.sol/<Name>.json`) for the
//! contracts this crate deploys itself.

use serde::Deserialize;
use std::fs;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Artifact errors
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("artifact for {name} not found at {path:?}")]
    NotFound { name: String, path: PathBuf },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("artifact parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("artifact for {0} has empty bytecode")]
    EmptyBytecode(String),
    #[error("artifact for {0} has invalid bytecode: {1}")]
    InvalidBytecode(String, hex::FromHexError),
}

/// A compiled contract: interface description plus creation bytecode.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    pub abi: serde_json::Value,
    pub bytecode: String,
}

impl Artifact {
    /// Load a named contract's artifact from a Hardhat build directory.
    pub fn load(artifacts_dir: &Path, name: &str) -> Result<Self, ArtifactError> {
        let path = artifacts_dir
            .join(format!("{name}.sol"))
            .join(format!("{name}.json"));

        if !path.exists() {
            return Err(ArtifactError::NotFound {
                name: name.to_string(),
                path,
            });
        }

        let file = fs::File::open(&path)?;
        let artifact: Artifact = serde_json::from_reader(BufReader::new(file))?;
        Ok(artifact)
    }

    /// Creation bytecode as raw bytes.
    pub fn deploy_code(&self) -> Result<Vec<u8>, ArtifactError> {
        let stripped = self.bytecode.strip_prefix("0x").unwrap_or(&self.bytecode);

        if stripped.is_empty() {
            return Err(ArtifactError::EmptyBytecode(self.contract_name.clone()));
        }

        hex::decode(stripped)
            .map_err(|e| ArtifactError::InvalidBytecode(self.contract_name.clone(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_artifact(dir: &Path, name: &str, bytecode: &str) {
        let contract_dir = dir.join(format!("{name}.sol"));
        fs::create_dir_all(&contract_dir).unwrap();

        let json = serde_json::json!({
            "contractName": name,
            "abi": [],
            "bytecode": bytecode,
            "deployedBytecode": bytecode,
        });
        fs::write(
            contract_dir.join(format!("{name}.json")),
            serde_json::to_string_pretty(&json).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn test_load_and_decode() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "SystemManager", "0x6080604052");

        let artifact = Artifact::load(dir.path(), "SystemManager").unwrap();
        assert_eq!(artifact.contract_name, "SystemManager");
        assert_eq!(
            artifact.deploy_code().unwrap(),
            vec![0x60, 0x80, 0x60, 0x40, 0x52]
        );
    }

    #[test]
    fn test_bytecode_without_prefix() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "TrustedSeller", "6080");

        let artifact = Artifact::load(dir.path(), "TrustedSeller").unwrap();
        assert_eq!(artifact.deploy_code().unwrap(), vec![0x60, 0x80]);
    }

    #[test]
    fn test_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();

        let err = Artifact::load(dir.path(), "SystemManager").unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { .. }));
    }

    #[test]
    fn test_empty_bytecode_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "Abstract", "0x");

        let artifact = Artifact::load(dir.path(), "Abstract").unwrap();
        assert!(matches!(
            artifact.deploy_code().unwrap_err(),
            ArtifactError::EmptyBytecode(_)
        ));
    }

    #[test]
    fn test_invalid_bytecode_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "Broken", "0xzz");

        let artifact = Artifact::load(dir.path(), "Broken").unwrap();
        assert!(matches!(
            artifact.deploy_code().unwrap_err(),
            ArtifactError::InvalidBytecode(_, _)
        ));
    }
}
