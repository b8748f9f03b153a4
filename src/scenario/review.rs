//! Review the purchased item and inspect the seller's rating
//!
//! The buyer first reviews an item they never bought (must revert), then
//! the one they did. The listing information afterwards carries the
//! seller's rating.

use super::{report_expected_revert, Market, ScenarioError};
use crate::addresses::AddressBook;
use crate::client::Accounts;
use crate::config::Config;
use alloy::primitives::{keccak256, U256};

const RATING: u8 = 4;
const COMMENT: &str = "Nice watch and good communication with seller!";

pub async fn run(config: &Config, accounts: &Accounts) -> Result<(), ScenarioError> {
    let book = AddressBook::load(&config.addresses_file)?;
    let buyer_market = Market::bind(&book, &accounts.buyer);

    // The contract stores a hash of the review content next to the text.
    let content_hash = keccak256(COMMENT.as_bytes());

    println!("⭐ Reviewing the wrong item first...");
    println!(
        "   Seller {} | DigitalCopy {}",
        accounts.seller_address, book.digital_copy
    );
    match buyer_market
        .reviews
        .newReview(
            accounts.seller_address,
            RATING,
            book.digital_copy,
            U256::from(1),
            content_hash,
            COMMENT.to_string(),
        )
        .send()
        .await
    {
        Ok(pending) => {
            pending.watch().await?;
            log::warn!("review of an unpurchased item unexpectedly succeeded");
        }
        Err(err) => report_expected_revert("review of an unpurchased item", &err),
    }

    println!("⭐ Reviewing the purchased item...");
    buyer_market
        .reviews
        .newReview(
            accounts.seller_address,
            RATING,
            book.digital_copy,
            U256::ZERO,
            content_hash,
            COMMENT.to_string(),
        )
        .send()
        .await?
        .watch()
        .await?;
    println!("   Review recorded.");

    println!("🔎 Listing item 1 and checking the seller's rating...");
    let market = Market::bind(&book, &accounts.seller);
    market
        .digital_copy
        .putItemForSale(U256::from(1))
        .send()
        .await?
        .watch()
        .await?;

    let listing = market
        .system_manager
        .retrieveListingInformation(book.digital_copy, U256::from(1))
        .call()
        .await?;
    println!("   Seller: {}", listing.seller);
    println!("   Asking price: {}", listing.price);
    println!("   For sale: {}", listing.forSale);
    println!(
        "   Seller rating: {} ({} reviews)",
        listing.averageRating, listing.reviewCount
    );

    Ok(())
}
