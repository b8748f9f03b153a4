//! Register the first user and buy from the trusted seller
//!
//! Two watches go to the seller account; a third purchase of an item
//! already registered must revert. Ends with the proofs of ownership.

use super::{print_copy_info, report_expected_revert, Market, ScenarioError};
use crate::addresses::AddressBook;
use crate::client::Accounts;
use crate::config::Config;
use alloy::primitives::U256;

pub async fn run(config: &Config, accounts: &Accounts) -> Result<(), ScenarioError> {
    let book = AddressBook::load(&config.addresses_file)?;
    let market = Market::bind(&book, &accounts.seller);

    println!("👤 Registering Kari Olsen...");
    match market
        .users
        .createUser("Kari Olsen".to_string(), "01011991-04200".to_string())
        .send()
        .await
    {
        Ok(pending) => {
            pending.watch().await?;
            println!("   Registered.");
        }
        // A rerun hits the already-registered guard; that is fine here.
        Err(err) => log::debug!("createUser skipped: {err}"),
    }

    println!("🛒 Buying a Cosmograph Daytona for 500 000...");
    market
        .trusted_seller
        .purchase(
            "Cosmograph Daytona".to_string(),
            "500 000".to_string(),
            "Watch".to_string(),
            "Rolex".to_string(),
            "2049-3630".to_string(),
            accounts.seller_address,
        )
        .send()
        .await?
        .watch()
        .await?;

    println!("🛒 Buying a Submariner for 400 000...");
    market
        .trusted_seller
        .purchase(
            "Submariner".to_string(),
            "400 000".to_string(),
            "Watch".to_string(),
            "Rolex".to_string(),
            "2050-3630".to_string(),
            accounts.seller_address,
        )
        .send()
        .await?
        .watch()
        .await?;

    println!("🛒 TrustedWatches tries to sell the same Daytona to Kari again...");
    match market
        .trusted_seller
        .purchase(
            "Cosmograph Daytona".to_string(),
            "500 000".to_string(),
            "Watch".to_string(),
            "Rolex".to_string(),
            "2049-3630".to_string(),
            accounts.seller_address,
        )
        .send()
        .await
    {
        Ok(pending) => {
            pending.watch().await?;
            log::warn!("duplicate purchase unexpectedly succeeded");
        }
        Err(err) => report_expected_revert("duplicate purchase", &err),
    }

    println!("🔎 Proof of ownership:");
    for item in 0u64..2 {
        let id = U256::from(item);
        let owner = market.digital_copy.getOwner(id).call().await?;
        println!("   Item {item} owner: {owner}");

        let info = market
            .digital_copy
            .retrieveInformationForDigitalCopy(id)
            .call()
            .await?;
        print_copy_info(item, &info);
    }

    let owned = market
        .system_manager
        .retrieveAllOwnedItems(accounts.seller_address)
        .call()
        .await?;
    println!(
        "   Items owned by {}: {:?}",
        accounts.seller_address, owned
    );

    Ok(())
}
