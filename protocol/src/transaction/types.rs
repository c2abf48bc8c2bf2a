//! # Transaction Data Model
//!
//! The structures the chain actually hashes and signs, plus their canonical
//! encodings. The key design property: the transaction id is a pure
//! function of the header, and the header commits to the operation list
//! only through the operation merkle root. Two transactions with identical
//! headers have identical ids, full stop — signatures are not part of
//! identity, which is what makes multi-party signing possible.

use serde::{Deserialize, Serialize};

use crate::config::DIGEST_LENGTH;
use crate::crypto::hash::{merkle_root, sha256};
use crate::encoding::canonical::{Canonical, FieldWriter};
use crate::encoding::multihash::{hash_message, Multihash};
use crate::error::Result;

/// A single unit of work inside a transaction.
///
/// Operations form a tagged union on the wire; each variant occupies its
/// own field number in the canonical encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Deploy (or replace) contract bytecode at an address.
    UploadContract {
        contract_id: Vec<u8>,
        bytecode: Vec<u8>,
    },
    /// Invoke an entry point on a deployed contract.
    CallContract {
        contract_id: Vec<u8>,
        entry_point: u32,
        args: Vec<u8>,
    },
}

impl Canonical for Operation {
    fn canonical_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = FieldWriter::new();
        match self {
            Operation::UploadContract {
                contract_id,
                bytecode,
            } => {
                let mut inner = FieldWriter::new();
                inner.bytes(1, contract_id).bytes(2, bytecode);
                writer.message(1, &inner.finish());
            }
            Operation::CallContract {
                contract_id,
                entry_point,
                args,
            } => {
                let mut inner = FieldWriter::new();
                inner
                    .bytes(1, contract_id)
                    .uint32(2, *entry_point)
                    .bytes(3, args);
                writer.message(2, &inner.finish());
            }
        }
        Ok(writer.finish())
    }
}

/// The signed portion of a transaction.
///
/// Field numbers are fixed wire contract: chain_id=1, rc_limit=2, nonce=3,
/// operation_merkle_root=4, payer=5, payee=6. Defaults are omitted from
/// the canonical bytes, so an absent payee and an empty payee are the same
/// transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionHeader {
    /// Identifies which chain this transaction is valid on.
    #[serde(default)]
    pub chain_id: Vec<u8>,
    /// Upper bound on resource credits this transaction may consume.
    #[serde(default)]
    pub rc_limit: u64,
    /// The account nonce in its serialized union form.
    #[serde(default)]
    pub nonce: Vec<u8>,
    /// Binary multihash of the merkle root over operation digests.
    #[serde(default)]
    pub operation_merkle_root: Vec<u8>,
    /// Account charged for execution.
    #[serde(default)]
    pub payer: Vec<u8>,
    /// Account whose nonce is consumed, when distinct from the payer.
    #[serde(default)]
    pub payee: Vec<u8>,
}

impl Canonical for TransactionHeader {
    fn canonical_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = FieldWriter::new();
        writer
            .bytes(1, &self.chain_id)
            .uint64(2, self.rc_limit)
            .bytes(3, &self.nonce)
            .bytes(4, &self.operation_merkle_root)
            .bytes(5, &self.payer)
            .bytes(6, &self.payee);
        Ok(writer.finish())
    }
}

/// A full transaction: header, operations, identity, and signatures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transaction {
    pub header: TransactionHeader,
    #[serde(default)]
    pub operations: Vec<Operation>,
    /// The transaction id, once computed. `None` until the header is final.
    #[serde(default)]
    pub id: Option<Multihash>,
    /// Recoverable compact signatures over the id digest, in the order
    /// they were applied.
    #[serde(default)]
    pub signatures: Vec<Vec<u8>>,
}

impl Transaction {
    /// Compute the transaction id from the current header.
    ///
    /// This does not consult `operations` directly: the header's merkle
    /// root field is the only channel through which operations influence
    /// the id. Callers must refresh that field before calling this.
    pub fn compute_id(&self) -> Result<Multihash> {
        let header_bytes = self.header.canonical_bytes()?;
        Ok(Multihash::sha2_256(sha256(&header_bytes)))
    }
}

/// Compute the merkle-root multihash over a transaction's operations.
///
/// Each operation is canonically serialized and SHA-256 hashed to form a
/// leaf; the leaves reduce in list order.
pub fn operation_merkle_root(operations: &[Operation]) -> Result<Multihash> {
    let mut leaves: Vec<[u8; DIGEST_LENGTH]> = Vec::with_capacity(operations.len());
    for operation in operations {
        let digest = hash_message(operation)?;
        let mut leaf = [0u8; DIGEST_LENGTH];
        leaf.copy_from_slice(digest.digest());
        leaves.push(leaf);
    }
    Ok(Multihash::sha2_256(merkle_root(&leaves)))
}
