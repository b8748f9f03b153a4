//! Copymarket: deployment and demo flows for a digital-copy marketplace
//!
//! The marketplace itself lives in externally-compiled smart contracts
//! (SystemManager, TrustedSeller, DigitalCopy, Users, Reviews); this crate
//! is the client side that drives them over JSON-RPC:
//! - Deploys the contract system in dependency order and wires the
//!   addresses together
//! - Persists the deployed addresses to a flat JSON file for later runs
//! - Walks the demo narrative: user registration, purchase, resale,
//!   review, burn
//! - Extracts revert reasons for the guards the narrative trips on purpose
//! - Forecasts CREATE addresses from a deployer account and nonce
//!
//! Business rules (ownership transfer, review validation, listing state)
//! are enforced by the contracts, never re-implemented here.

pub mod addresses;
pub mod client;
pub mod config;
pub mod contracts;
pub mod scenario;

// Re-export commonly used types
pub use addresses::{checksummed, future_contract_address, AddressBook};
pub use client::{connect, connect_read_only, revert_reason, Accounts, ClientError};
pub use config::{Config, ConfigError};
pub use contracts::{Artifact, Deployment};
pub use scenario::ScenarioError;
