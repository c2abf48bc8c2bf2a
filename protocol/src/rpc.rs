//! # Chain RPC Abstraction
//!
//! The builder needs exactly four things from a node: an account's current
//! nonce, its available resource credits, the chain id, and a way to hand
//! off a finished transaction. [`ChainClient`] captures those four and
//! nothing else, so tests can swap in an in-memory mock and the transaction
//! pipeline never knows the difference.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::transaction::Transaction;

/// Client-side view of the chain RPC surface.
///
/// Implementations are expected to be shared across tasks (`Arc<dyn
/// ChainClient>`), hence the `Send + Sync` bound.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Fetch the account's current nonce counter. The next valid
    /// transaction nonce is this value plus one.
    async fn get_account_nonce(&self, address: &[u8]) -> Result<u64>;

    /// Fetch the account's currently available resource credits.
    async fn get_account_rc(&self, address: &[u8]) -> Result<u64>;

    /// Fetch the chain id the node is serving.
    async fn get_chain_id(&self) -> Result<Vec<u8>>;

    /// Submit a transaction to the node. With `broadcast` set the node also
    /// gossips it to peers; without, the node only validates and applies it
    /// to its own pending state.
    async fn submit_transaction(
        &self,
        transaction: &Transaction,
        broadcast: bool,
    ) -> Result<TransactionReceipt>;
}

/// What the node reports back after accepting a transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionReceipt {
    /// Binary multihash id of the accepted transaction.
    #[serde(default)]
    pub id: Vec<u8>,
    /// Account charged for execution.
    #[serde(default)]
    pub payer: Vec<u8>,
    /// The limit the transaction declared.
    #[serde(default)]
    pub rc_limit: u64,
    /// Credits actually consumed.
    #[serde(default)]
    pub rc_used: u64,
    /// True when execution failed and state changes were rolled back.
    #[serde(default)]
    pub reverted: bool,
    /// Execution log lines emitted by the contracts involved.
    #[serde(default)]
    pub logs: Vec<String>,
}
