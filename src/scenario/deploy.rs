//! Deploy the contract system and persist its addresses
//!
//! Order matters: SystemManager first (its constructor deploys Users and
//! Reviews, announced by events), then DigitalCopy through the manager,
//! then TrustedSeller, which is registered with the manager and pointed at
//! the DigitalCopy contract.

use super::ScenarioError;
use crate::addresses::AddressBook;
use crate::client::Accounts;
use crate::config::Config;
use crate::contracts::{deploy_contract, wait_for_event, Artifact, SystemManager, TrustedSeller};
use alloy::sol_types::SolConstructor;

/// Name the storefront registers under.
const SELLER_NAME: &str = "TrustedWatches";

pub async fn run(config: &Config, accounts: &Accounts) -> Result<(), ScenarioError> {
    let manager_artifact = Artifact::load(&config.artifacts_dir, "SystemManager")?;
    let seller_artifact = Artifact::load(&config.artifacts_dir, "TrustedSeller")?;

    // SystemManager; its constructor deploys Users and Reviews.
    println!("🚀 Deploying SystemManager...");
    let manager = deploy_contract(
        &accounts.seller,
        manager_artifact.deploy_code()?,
        "SystemManager",
    )
    .await?;

    // The two announcements resolve independently; wait on both.
    let users_event = wait_for_event::<SystemManager::DeployedUsersContract>(
        &accounts.seller,
        manager.address,
        manager.block,
    );
    let reviews_event = wait_for_event::<SystemManager::DeployedReviewsContract>(
        &accounts.seller,
        manager.address,
        manager.block,
    );
    let (users, reviews) = tokio::try_join!(users_event, reviews_event)?;

    println!("   Users contract deployed to {}", users.usersContract);
    println!("   Reviews contract deployed to {}", reviews.reviewsContract);
    println!("   SystemManager contract deployed to {}", manager.address);

    let system_manager = SystemManager::new(manager.address, accounts.seller.clone());

    // DigitalCopy is deployed by the manager, not by us.
    println!("🪙 Deploying DigitalCopy through the SystemManager...");
    let receipt = system_manager
        .deployDigitalCopy()
        .send()
        .await?
        .get_receipt()
        .await?;
    let digital_copy = wait_for_event::<SystemManager::DeployedDigitalCopyContract>(
        &accounts.seller,
        manager.address,
        receipt.block_number.unwrap_or(manager.block),
    )
    .await?;
    println!(
        "   DigitalCopy contract deployed to {}",
        digital_copy.digitalCopyContract
    );

    // TrustedSeller takes its name and the manager address.
    println!("🏪 Deploying TrustedSeller...");
    let mut code = seller_artifact.deploy_code()?;
    code.extend(
        TrustedSeller::constructorCall {
            name: SELLER_NAME.to_string(),
            systemManager: manager.address,
        }
        .abi_encode(),
    );
    let seller = deploy_contract(&accounts.seller, code, "TrustedSeller").await?;
    println!("   TrustedSeller contract deployed to {}", seller.address);

    println!("🔗 Wiring the system together...");
    system_manager
        .add(seller.address)
        .send()
        .await?
        .watch()
        .await?;
    println!("   TrustedSeller added to the approved-seller list");

    let trusted_seller = TrustedSeller::new(seller.address, accounts.seller.clone());
    trusted_seller
        .changeDigitalCopyContract(digital_copy.digitalCopyContract)
        .send()
        .await?
        .watch()
        .await?;
    println!("   TrustedSeller now mints through the DigitalCopy contract");

    let book = AddressBook {
        system_manager: manager.address,
        trusted_seller: seller.address,
        digital_copy: digital_copy.digitalCopyContract,
        users: users.usersContract,
        reviews: reviews.reviewsContract,
    };
    book.save(&config.addresses_file)?;

    println!(
        "💾 Contract addresses written to {:?}",
        config.addresses_file
    );
    Ok(())
}
