//! Copymarket CLI
//!
//! One subcommand per stage of the marketplace demo, plus a local
//! CREATE-address forecast.

use alloy::primitives::Address;
use alloy::providers::Provider;
use clap::{Parser, Subcommand};
use copymarket::addresses::{checksummed, future_contract_address};
use copymarket::client;
use copymarket::config::Config;
use copymarket::scenario;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "market")]
#[command(version = "0.1.0")]
#[command(about = "Deploy and exercise the digital-copy marketplace contracts", long_about = None)]
struct Cli {
    /// Hardhat build output directory holding the compiled artifacts
    #[arg(long, default_value = "artifacts/contracts")]
    artifacts_dir: PathBuf,

    /// JSON file the deployed contract addresses are persisted to
    #[arg(long, default_value = "contract-addresses.json")]
    addresses_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy the contract system and persist its addresses
    Deploy,

    /// Register the first user and buy two watches from the trusted seller
    Purchase,

    /// List an item and resell it to the second account
    Sell,

    /// Review the purchased item and inspect the seller's rating
    Review,

    /// Burn a digital copy
    Burn,

    /// Predict where a deployer's next contract will land
    FutureAddress {
        /// Deployer wallet address
        #[arg(short, long)]
        address: Address,

        /// Account nonce; fetched from the node when omitted
        #[arg(short, long)]
        nonce: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // With an explicit nonce the forecast is pure local computation and
    // needs neither keys nor a node.
    if let Commands::FutureAddress {
        address,
        nonce: Some(nonce),
    } = &cli.command
    {
        print_forecast(*address, *nonce);
        return Ok(());
    }

    let config = Config::from_env(cli.artifacts_dir.clone(), cli.addresses_file.clone())?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        match cli.command {
            Commands::Deploy => {
                let accounts = client::connect(&config)?;
                scenario::deploy::run(&config, &accounts).await?;
            }

            Commands::Purchase => {
                let accounts = client::connect(&config)?;
                scenario::purchase::run(&config, &accounts).await?;
            }

            Commands::Sell => {
                let accounts = client::connect(&config)?;
                scenario::sell::run(&config, &accounts).await?;
            }

            Commands::Review => {
                let accounts = client::connect(&config)?;
                scenario::review::run(&config, &accounts).await?;
            }

            Commands::Burn => {
                let accounts = client::connect(&config)?;
                scenario::burn::run(&config, &accounts).await?;
            }

            Commands::FutureAddress { address, nonce } => {
                debug_assert!(nonce.is_none());
                let provider = client::connect_read_only(&config.rpc_url)?;
                let nonce = provider.get_transaction_count(address).await?;
                print_forecast(address, nonce);
            }
        }

        Ok::<(), Box<dyn std::error::Error>>(())
    })?;

    Ok(())
}

fn print_forecast(address: Address, nonce: u64) {
    let future = future_contract_address(address, nonce);
    println!("🔮 Next contract deployed by {address} (nonce {nonce}):");
    println!("   {}", checksummed(future));
}
