//! Demo flows exercising the deployed marketplace
//!
//! Each submodule mirrors one stage of the manual test scenario: deploy,
//! purchase, sell, review, burn. The flows run a fixed sequence of contract
//! calls, narrate the results, and treat the guards they deliberately trip
//! as expected reverts.

pub mod burn;
pub mod deploy;
pub mod purchase;
pub mod review;
pub mod sell;

use crate::addresses::{AddressBook, BookError};
use crate::client::revert_reason;
use crate::contracts::{
    ArtifactError, DeployError, DigitalCopy, EventError, Reviews, SystemManager, TrustedSeller,
    Users,
};
use alloy::providers::{DynProvider, PendingTransactionError};
use thiserror::Error;

/// Scenario errors
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),
    #[error("address book error: {0}")]
    AddressBook(#[from] BookError),
    #[error("deployment failed: {0}")]
    Deploy(#[from] DeployError),
    #[error("event wait failed: {0}")]
    Event(#[from] EventError),
    #[error("contract call failed: {0}")]
    Contract(#[from] alloy::contract::Error),
    #[error("transaction confirmation failed: {0}")]
    Confirmation(#[from] PendingTransactionError),
}

/// Handles to all five contracts, bound to one signing account.
pub(crate) struct Market {
    pub system_manager: SystemManager::SystemManagerInstance<DynProvider>,
    pub trusted_seller: TrustedSeller::TrustedSellerInstance<DynProvider>,
    pub digital_copy: DigitalCopy::DigitalCopyInstance<DynProvider>,
    pub users: Users::UsersInstance<DynProvider>,
    pub reviews: Reviews::ReviewsInstance<DynProvider>,
}

impl Market {
    pub fn bind(book: &AddressBook, provider: &DynProvider) -> Self {
        Self {
            system_manager: SystemManager::new(book.system_manager, provider.clone()),
            trusted_seller: TrustedSeller::new(book.trusted_seller, provider.clone()),
            digital_copy: DigitalCopy::new(book.digital_copy, provider.clone()),
            users: Users::new(book.users, provider.clone()),
            reviews: Reviews::new(book.reviews, provider.clone()),
        }
    }
}

/// Print the reason behind a revert the narrative expects.
pub(crate) fn report_expected_revert(context: &str, err: &alloy::contract::Error) {
    match revert_reason(err) {
        Some(reason) => println!("   ⛔ Revert reason: {reason}"),
        None => log::warn!("{context} failed without a decodable revert reason: {err}"),
    }
}

/// Narrate one digital copy's registered information.
pub(crate) fn print_copy_info(
    item: u64,
    info: &DigitalCopy::retrieveInformationForDigitalCopyReturn,
) {
    println!(
        "   Item {item}: {} {} ({}) | serial {} | last price {}",
        info.brand, info.model, info.category, info.serialNumber, info.price
    );
}
