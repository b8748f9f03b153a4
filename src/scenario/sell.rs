//! List an item and resell it to the second account
//!
//! Shows the for-sale gate on item information, the transfer to the buyer,
//! and the seller attempting to move the item back cheaper.

use super::{print_copy_info, report_expected_revert, Market, ScenarioError};
use crate::addresses::AddressBook;
use crate::client::Accounts;
use crate::config::Config;
use alloy::primitives::U256;

pub async fn run(config: &Config, accounts: &Accounts) -> Result<(), ScenarioError> {
    let book = AddressBook::load(&config.addresses_file)?;
    let market = Market::bind(&book, &accounts.seller);
    let buyer_market = Market::bind(&book, &accounts.buyer);

    println!("👤 Registering buyer Ola Hermansen...");
    match buyer_market
        .users
        .createUser("Ola Hermansen".to_string(), "12121992-60009".to_string())
        .send()
        .await
    {
        Ok(pending) => {
            pending.watch().await?;
            println!("   Registered.");
        }
        Err(err) => report_expected_revert("buyer registration", &err),
    }

    println!("🔎 Buyer inspects item 0 before it is listed...");
    let owner = market.digital_copy.getOwner(U256::ZERO).call().await?;
    println!("   Owner: {owner}");

    let for_sale = buyer_market
        .digital_copy
        .isItemForSale(U256::ZERO)
        .call()
        .await?;
    println!("   For sale: {for_sale}");

    match buyer_market
        .digital_copy
        .retrieveInformationForDigitalCopy(U256::ZERO)
        .call()
        .await
    {
        Ok(info) => {
            log::warn!("an unlisted item leaked its information");
            print_copy_info(0, &info);
        }
        Err(err) => report_expected_revert("reading an unlisted item", &err),
    }

    println!("🏷️  Seller lists item 0 for sale...");
    market
        .digital_copy
        .putItemForSale(U256::ZERO)
        .send()
        .await?
        .watch()
        .await?;

    let info = buyer_market
        .digital_copy
        .retrieveInformationForDigitalCopy(U256::ZERO)
        .call()
        .await?;
    print_copy_info(0, &info);
    let for_sale = buyer_market
        .digital_copy
        .isItemForSale(U256::ZERO)
        .call()
        .await?;
    println!("   For sale: {for_sale}");

    println!("🤝 Selling item 0 to the buyer for 450 000...");
    market
        .digital_copy
        .transfer(U256::ZERO, accounts.buyer_address, "450 000".to_string())
        .send()
        .await?
        .watch()
        .await?;
    let owner = market.digital_copy.getOwner(U256::ZERO).call().await?;
    println!("   New owner: {owner}");

    println!("↩️  Seller tries to sell the item back to themself cheaper...");
    market
        .digital_copy
        .putItemForSale(U256::ZERO)
        .send()
        .await?
        .watch()
        .await?;
    market
        .digital_copy
        .transfer(U256::ZERO, accounts.seller_address, "350 000".to_string())
        .send()
        .await?
        .watch()
        .await?;

    Ok(())
}
