//! Deployment transactions and event waiting
//!
//! A deployment is an ordinary transaction carrying creation bytecode; the
//! new contract's address comes back in the receipt. Contracts deployed
//! *by other contracts* announce their addresses through events instead,
//! so this module also provides an awaitable watcher that resolves once a
//! given event shows up in the logs.

use alloy::primitives::Address;
use alloy::providers::{DynProvider, PendingTransactionError, Provider};
use alloy::rpc::types::{Filter, TransactionRequest};
use alloy::sol_types::SolEvent;
use alloy::transports::TransportError;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// How often the event watcher polls the node for new logs.
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Safety deadline so a lost event cannot hang a deployment forever.
const EVENT_DEADLINE: Duration = Duration::from_secs(60);

/// Deployment errors
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("transaction submission failed: {0}")]
    Rpc(#[from] TransportError),
    #[error("transaction confirmation failed: {0}")]
    Confirmation(#[from] PendingTransactionError),
    #[error("deployment of {0} produced no contract address")]
    MissingAddress(String),
}

/// Event watcher errors
#[derive(Error, Debug)]
pub enum EventError {
    #[error("RPC error while polling logs: {0}")]
    Rpc(#[from] TransportError),
    #[error("could not decode `{0}` log: {1}")]
    Decode(&'static str, alloy::sol_types::Error),
    #[error("timed out waiting for `{0}`")]
    Timeout(&'static str),
}

/// Where a deployment transaction landed.
#[derive(Debug, Clone, Copy)]
pub struct Deployment {
    pub address: Address,
    pub block: u64,
}

/// Deploy creation bytecode (with any constructor arguments already
/// appended) and wait for the receipt.
pub async fn deploy_contract(
    provider: &DynProvider,
    code: Vec<u8>,
    name: &str,
) -> Result<Deployment, DeployError> {
    use alloy::network::TransactionBuilder;

    let tx = TransactionRequest::default().with_deploy_code(code);
    let receipt = provider.send_transaction(tx).await?.get_receipt().await?;

    let address = receipt
        .contract_address
        .ok_or_else(|| DeployError::MissingAddress(name.to_string()))?;
    let block = receipt.block_number.unwrap_or_default();

    log::debug!("{name} deployment mined in block {block}");
    Ok(Deployment { address, block })
}

/// Resolve once `E` is emitted by `address` at or after `from_block`.
///
/// Polls `eth_getLogs` rather than installing a node-side filter, so events
/// already mined (e.g. emitted by a constructor) are found too.
pub async fn wait_for_event<E: SolEvent>(
    provider: &DynProvider,
    address: Address,
    from_block: u64,
) -> Result<E, EventError> {
    let filter = Filter::new()
        .address(address)
        .event_signature(E::SIGNATURE_HASH)
        .from_block(from_block);
    let deadline = Instant::now() + EVENT_DEADLINE;

    loop {
        let logs = provider.get_logs(&filter).await?;
        if let Some(log) = logs.first() {
            return E::decode_log_data(log.data())
                .map_err(|e| EventError::Decode(E::SIGNATURE, e));
        }

        if Instant::now() >= deadline {
            return Err(EventError::Timeout(E::SIGNATURE));
        }
        tokio::time::sleep(EVENT_POLL_INTERVAL).await;
    }
}
