//! # Transaction Assembly
//!
//! [`TransactionBuilder`] turns a list of operations and a signing key into
//! a chain-ready transaction. Every header field can be pinned explicitly;
//! anything left unset is resolved from a [`ChainClient`] at build time.
//! When every field is pinned, a build makes zero network calls — that is
//! what lets the same code path serve both online wallets and offline
//! signing rigs.
//!
//! Resolution is all-or-nothing: the builder gathers every value it needs
//! before touching the output transaction, so a failed RPC can never leave
//! a half-populated header behind.

use std::sync::Arc;

use tracing::debug;

use crate::config::RC_ONE;
use crate::crypto::keys::VelaKeypair;
use crate::encoding::nonce::encode_nonce;
use crate::error::{Error, Result};
use crate::rpc::{ChainClient, TransactionReceipt};
use crate::transaction::signing::sign_transaction;
use crate::transaction::types::{operation_merkle_root, Operation, Transaction, TransactionHeader};
use crate::util::rc_fraction;

/// Fluent assembler for transactions.
///
/// ```no_run
/// # use vela_protocol::transaction::{Operation, TransactionBuilder};
/// # use vela_protocol::crypto::VelaKeypair;
/// # async fn demo() -> vela_protocol::Result<()> {
/// let keypair = VelaKeypair::generate()?;
/// let tx = TransactionBuilder::new()
///     .add_operations(vec![Operation::CallContract {
///         contract_id: vec![0x01; 25],
///         entry_point: 0x2b89e155,
///         args: vec![],
///     }])
///     .chain_id(vec![0x12, 0x20])
///     .nonce(7)
///     .rc_limit(100_000, true)
///     .keypair(keypair)
///     .build(true)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct TransactionBuilder {
    operations: Vec<Operation>,
    client: Option<Arc<dyn ChainClient>>,
    nonce_bytes: Option<Vec<u8>>,
    rc_value: Option<u64>,
    rc_absolute: bool,
    chain_id: Option<Vec<u8>>,
    payer: Option<Vec<u8>>,
    keypair: Option<VelaKeypair>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append operations to the transaction, preserving order.
    pub fn add_operations(mut self, operations: Vec<Operation>) -> Self {
        self.operations.extend(operations);
        self
    }

    /// Provide a chain client for resolving unset header fields.
    pub fn client(mut self, client: Arc<dyn ChainClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Pin the transaction nonce explicitly. The value is stored in its
    /// serialized union form, exactly as the header carries it.
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce_bytes = Some(encode_nonce(nonce));
        self
    }

    /// Set the resource-credit limit.
    ///
    /// With `absolute` set, `value` is the limit itself. Otherwise `value`
    /// is a fixed-point fraction (`RC_ONE` == 1.0) of the signer's available
    /// credits, resolved at build time.
    pub fn rc_limit(mut self, value: u64, absolute: bool) -> Self {
        self.rc_value = Some(value);
        self.rc_absolute = absolute;
        self
    }

    /// Pin the chain id explicitly.
    pub fn chain_id(mut self, chain_id: Vec<u8>) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    /// Set a payer distinct from the signer. When the payer differs from
    /// the signer's address, the signer is recorded as payee and its nonce
    /// is consumed.
    pub fn payer(mut self, payer: Vec<u8>) -> Self {
        self.payer = Some(payer);
        self
    }

    /// Set the signing keypair. Required even for unsigned builds, since
    /// the signer's address anchors payer/payee resolution.
    pub fn keypair(mut self, keypair: VelaKeypair) -> Self {
        self.keypair = Some(keypair);
        self
    }

    fn require_client(&self, what: &'static str) -> Result<&Arc<dyn ChainClient>> {
        self.client.as_ref().ok_or(Error::Request(what))
    }

    /// Assemble the transaction, resolving any unset fields through the
    /// chain client. With `signed` set, the signer's signature is appended
    /// before returning.
    pub async fn build(&self, signed: bool) -> Result<Transaction> {
        if self.operations.is_empty() {
            return Err(Error::Request("no operations to build transaction"));
        }
        let keypair = self
            .keypair
            .as_ref()
            .ok_or(Error::Request("no keypair given"))?;

        let signer_address = keypair.address_bytes().to_vec();
        let payer = self.payer.clone().unwrap_or_else(|| signer_address.clone());

        // The signer's nonce is the one consumed, whether the signer is
        // payer or payee.
        let nonce = match &self.nonce_bytes {
            Some(bytes) => bytes.clone(),
            None => {
                let client =
                    self.require_client("no chain client to resolve account nonce")?;
                let current = client.get_account_nonce(&signer_address).await?;
                let next = current
                    .checked_add(1)
                    .ok_or(Error::Request("account nonce exhausted"))?;
                debug!(nonce = next, "resolved account nonce");
                encode_nonce(next)
            }
        };

        let rc_limit = match (self.rc_value, self.rc_absolute) {
            (Some(value), true) => value,
            (value, false) => {
                let fraction = value.unwrap_or(RC_ONE);
                // The fraction is taken of the signer's balance, even when a
                // distinct payer sponsors the transaction.
                let client =
                    self.require_client("no chain client to resolve resource credits")?;
                let available = client.get_account_rc(&signer_address).await?;
                let limit = rc_fraction(available, fraction);
                debug!(available, fraction, limit, "resolved resource credit limit");
                limit
            }
            (None, true) => return Err(Error::Request("absolute rc limit requires a value")),
        };

        let chain_id = match &self.chain_id {
            Some(id) => id.clone(),
            None => {
                let client = self.require_client("no chain client to resolve chain id")?;
                let id = client.get_chain_id().await?;
                debug!(chain_id = %hex::encode(&id), "resolved chain id");
                id
            }
        };

        let mut transaction = assemble_transaction(
            &self.operations,
            chain_id,
            rc_limit,
            nonce,
            payer,
            &signer_address,
        )?;

        if signed {
            sign_transaction(&mut transaction, keypair)?;
        }

        Ok(transaction)
    }

    /// Build, sign, and hand the transaction to the chain client.
    pub async fn submit(&self, broadcast: bool) -> Result<TransactionReceipt> {
        let client = self.require_client("no chain client to submit transaction")?;
        let transaction = self.build(true).await?;
        if let Some(id) = &transaction.id {
            debug!(id = %id, broadcast, "submitting transaction");
        }
        client.submit_transaction(&transaction, broadcast).await
    }
}

/// Assemble a transaction from fully resolved header inputs.
///
/// Sets the payee only when the payer differs from the signer: a payee
/// equal to the payer is redundant and canonical encoding omits it.
fn assemble_transaction(
    operations: &[Operation],
    chain_id: Vec<u8>,
    rc_limit: u64,
    nonce: Vec<u8>,
    payer: Vec<u8>,
    signer_address: &[u8],
) -> Result<Transaction> {
    let merkle_root = operation_merkle_root(operations)?;

    let payee = if payer != signer_address {
        signer_address.to_vec()
    } else {
        Vec::new()
    };

    let header = TransactionHeader {
        chain_id,
        rc_limit,
        nonce,
        operation_merkle_root: merkle_root.encode(),
        payer,
        payee,
    };

    let mut transaction = Transaction {
        header,
        operations: operations.to_vec(),
        id: None,
        signatures: Vec::new(),
    };
    transaction.id = Some(transaction.compute_id()?);
    Ok(transaction)
}

/// Fill in the unresolved fields of an externally constructed transaction
/// and recompute its identity.
///
/// Unlike the builder, this mutates in place — but only after every needed
/// value has been fetched, so a provider failure leaves the transaction
/// untouched. An empty nonce is resolved against the payee when one is set
/// (that is whose nonce the chain consumes), otherwise the payer. A zero
/// rc limit becomes the payer's full available credits.
pub async fn prepare_transaction(
    transaction: &mut Transaction,
    client: &dyn ChainClient,
) -> Result<()> {
    let nonce = if transaction.header.nonce.is_empty() {
        let account = if !transaction.header.payee.is_empty() {
            &transaction.header.payee
        } else {
            &transaction.header.payer
        };
        let current = client.get_account_nonce(account).await?;
        let next = current
            .checked_add(1)
            .ok_or(Error::Request("account nonce exhausted"))?;
        Some(encode_nonce(next))
    } else {
        None
    };

    let rc_limit = if transaction.header.rc_limit == 0 {
        Some(client.get_account_rc(&transaction.header.payer).await?)
    } else {
        None
    };

    let chain_id = if transaction.header.chain_id.is_empty() {
        Some(client.get_chain_id().await?)
    } else {
        None
    };

    // Everything resolved; commit.
    if let Some(nonce) = nonce {
        transaction.header.nonce = nonce;
    }
    if let Some(rc_limit) = rc_limit {
        transaction.header.rc_limit = rc_limit;
    }
    if let Some(chain_id) = chain_id {
        transaction.header.chain_id = chain_id;
    }

    transaction.header.operation_merkle_root =
        operation_merkle_root(&transaction.operations)?.encode();
    transaction.id = Some(transaction.compute_id()?);
    Ok(())
}
