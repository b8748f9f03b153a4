//! Deployed-address persistence
//!
//! The deploy flow writes the five contract addresses to a flat JSON file;
//! every interaction flow reads it back. The file is never updated in
//! place: a new deployment overwrites it wholesale.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Address book errors
#[derive(Error, Debug)]
pub enum BookError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("address file not found at {0:?} (run `deploy` first)")]
    NotFound(PathBuf),
}

/// The five deployed contract addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressBook {
    pub system_manager: Address,
    pub trusted_seller: Address,
    pub digital_copy: Address,
    pub users: Address,
    pub reviews: Address,
}

impl AddressBook {
    /// Write the book to disk, replacing any previous deployment.
    pub fn save(&self, path: &Path) -> Result<(), BookError> {
        // Write to a temporary file first, then rename into place.
        let temp_path = path.with_extension("tmp");
        let file = fs::File::create(&temp_path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }

    /// Load the book written by the last deployment.
    pub fn load(path: &Path) -> Result<Self, BookError> {
        if !path.exists() {
            return Err(BookError::NotFound(path.to_path_buf()));
        }

        let file = fs::File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    fn sample() -> AddressBook {
        AddressBook {
            system_manager: address!("1000000000000000000000000000000000000001"),
            trusted_seller: address!("1000000000000000000000000000000000000002"),
            digital_copy: address!("1000000000000000000000000000000000000003"),
            users: address!("1000000000000000000000000000000000000004"),
            reviews: address!("1000000000000000000000000000000000000005"),
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contract-addresses.json");

        let book = sample();
        book.save(&path).unwrap();

        assert_eq!(AddressBook::load(&path).unwrap(), book);
    }

    #[test]
    fn test_new_deployment_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contract-addresses.json");

        sample().save(&path).unwrap();

        let mut second = sample();
        second.trusted_seller = address!("2000000000000000000000000000000000000002");
        second.save(&path).unwrap();

        assert_eq!(AddressBook::load(&path).unwrap(), second);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contract-addresses.json");

        let err = AddressBook::load(&path).unwrap_err();
        assert!(matches!(err, BookError::NotFound(_)));
    }

    #[test]
    fn test_json_keys_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        let object = json.as_object().unwrap();

        for key in [
            "systemManager",
            "trustedSeller",
            "digitalCopy",
            "users",
            "reviews",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
    }
}
