//! # Transaction Pipeline
//!
//! Everything between "I want to call this contract" and "signed bytes the
//! chain will accept" lives here, in three stages:
//!
//! 1. [`types`] — the transaction data model and its canonical encoding,
//!    including the merkle commitment that binds the header to the
//!    operation list.
//! 2. [`builder`] — assembly: resolving nonce, resource limits, and chain
//!    id (locally or from a node) and computing the transaction id.
//! 3. [`signing`] — appending recoverable signatures over the id digest.
//!
//! The stages are deliberately separable: a transaction can be built on an
//! online machine and signed on an air-gapped one, because signing needs
//! nothing but the id and a key.

pub mod builder;
pub mod signing;
pub mod types;

pub use builder::{prepare_transaction, TransactionBuilder};
pub use signing::sign_transaction;
pub use types::{operation_merkle_root, Operation, Transaction, TransactionHeader};
