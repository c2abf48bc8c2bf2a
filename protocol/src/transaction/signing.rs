//! # Transaction Signing
//!
//! Signatures cover the transaction id digest, not the raw transaction
//! bytes — the id already commits to the header, and the header commits to
//! the operations through the merkle root. That indirection is what makes
//! signing cheap and offline-friendly: a signer needs only the 32-byte
//! digest, never the full operation payloads.
//!
//! Signing is append-only. Multi-party transactions (a sponsor paying for
//! another account's operations, multisig authorities) accumulate one
//! signature per call, in call order, without disturbing the id or any
//! earlier signature.

use tracing::debug;

use crate::crypto::keys::VelaKeypair;
use crate::error::{Error, Result};
use crate::transaction::types::Transaction;

/// Append the keypair's recoverable signature over the transaction id.
///
/// The transaction must already carry its id; signing a transaction whose
/// header is still in flux would produce a signature over stale identity.
pub fn sign_transaction(transaction: &mut Transaction, keypair: &VelaKeypair) -> Result<()> {
    let id = transaction
        .id
        .as_ref()
        .ok_or(Error::Request("transaction has no id to sign"))?;

    let signature = keypair.sign_digest(id.digest())?;
    debug!(id = %id, signer = %keypair.address(), "signed transaction");

    transaction.signatures.push(signature.to_vec());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::recover_public_key;
    use crate::encoding::nonce::encode_nonce;
    use crate::transaction::types::{operation_merkle_root, Operation, TransactionHeader};

    fn unsigned_transaction() -> Transaction {
        let operations = vec![Operation::CallContract {
            contract_id: vec![0x03; 25],
            entry_point: 0xcafe,
            args: vec![0x01, 0x02],
        }];
        let header = TransactionHeader {
            chain_id: vec![0xc1],
            rc_limit: 1_000,
            nonce: encode_nonce(1),
            operation_merkle_root: operation_merkle_root(&operations).unwrap().encode(),
            payer: vec![0x05; 25],
            payee: vec![],
        };
        let mut tx = Transaction {
            header,
            operations,
            id: None,
            signatures: vec![],
        };
        tx.id = Some(tx.compute_id().unwrap());
        tx
    }

    #[test]
    fn signing_requires_an_id() {
        let mut tx = unsigned_transaction();
        tx.id = None;
        let keypair = VelaKeypair::generate().unwrap();
        assert!(matches!(
            sign_transaction(&mut tx, &keypair),
            Err(Error::Request("transaction has no id to sign"))
        ));
        assert!(tx.signatures.is_empty());
    }

    #[test]
    fn signing_does_not_change_the_id() {
        let mut tx = unsigned_transaction();
        let id_before = tx.id.clone();
        sign_transaction(&mut tx, &VelaKeypair::generate().unwrap()).unwrap();
        assert_eq!(tx.id, id_before);
        assert_eq!(tx.compute_id().unwrap(), id_before.unwrap());
    }

    #[test]
    fn multiple_signers_append_in_order() {
        let mut tx = unsigned_transaction();
        let alice = VelaKeypair::generate().unwrap();
        let bob = VelaKeypair::generate().unwrap();

        sign_transaction(&mut tx, &alice).unwrap();
        let first = tx.signatures[0].clone();
        sign_transaction(&mut tx, &bob).unwrap();

        assert_eq!(tx.signatures.len(), 2);
        assert_eq!(tx.signatures[0], first);

        let digest = tx.id.as_ref().unwrap().digest().to_vec();
        assert_eq!(
            recover_public_key(&digest, &tx.signatures[0]).unwrap(),
            alice.public_key()
        );
        assert_eq!(
            recover_public_key(&digest, &tx.signatures[1]).unwrap(),
            bob.public_key()
        );
    }
}
