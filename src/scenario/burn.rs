//! Burn a digital copy
//!
//! Burning an item the account no longer owns must revert; burning the
//! remaining one removes it from the owned-items view.

use super::{report_expected_revert, Market, ScenarioError};
use crate::addresses::AddressBook;
use crate::client::Accounts;
use crate::config::Config;
use alloy::primitives::U256;

pub async fn run(config: &Config, accounts: &Accounts) -> Result<(), ScenarioError> {
    let book = AddressBook::load(&config.addresses_file)?;
    let market = Market::bind(&book, &accounts.seller);

    println!("🔥 Trying to burn item 0 (sold to the buyer)...");
    match market.digital_copy.burn(U256::ZERO).send().await {
        Ok(pending) => {
            pending.watch().await?;
            log::warn!("burning a sold item unexpectedly succeeded");
        }
        Err(err) => report_expected_revert("burning a sold item", &err),
    }

    let owned = market
        .system_manager
        .retrieveAllOwnedItems(accounts.seller_address)
        .call()
        .await?;
    println!("📋 Items owned before the burn: {owned:?}");

    println!("🔥 Burning item 1...");
    market
        .digital_copy
        .burn(U256::from(1))
        .send()
        .await?
        .watch()
        .await?;

    let owned = market
        .system_manager
        .retrieveAllOwnedItems(accounts.seller_address)
        .call()
        .await?;
    println!("📋 Items owned after the burn: {owned:?}");

    Ok(())
}
