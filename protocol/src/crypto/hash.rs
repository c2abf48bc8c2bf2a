//! # Hashing Utilities
//!
//! The hash functions used throughout the Vela client core. SHA-256 carries
//! almost all the weight: operation digests, transaction ids, merkle nodes,
//! and (doubled) base58check checksums. RIPEMD-160 appears exactly once, as
//! the outer hash of the hash160 construction that turns a public key into
//! an address payload.
//!
//! Everything in this file is a pure function of its input — stateless,
//! allocation-light, and safe to call from any thread.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::config::DIGEST_LENGTH;

/// Compute the SHA-256 hash of the input data.
///
/// Returns a fixed-size 32-byte digest. This is the workhorse of the crate;
/// every consensus-relevant identifier bottoms out here.
pub fn sha256(data: &[u8]) -> [u8; DIGEST_LENGTH] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the double-SHA-256 hash: `SHA-256(SHA-256(data))`.
///
/// Used for base58check checksums (WIF and addresses), where the first four
/// bytes of this digest guard against typos and truncation.
pub fn double_sha256(data: &[u8]) -> [u8; DIGEST_LENGTH] {
    sha256(&sha256(data))
}

/// Compute hash160: `RIPEMD-160(SHA-256(data))`.
///
/// The legacy construction that compresses a 33-byte public key into the
/// 20-byte payload of an address. The double hash is historical, but the
/// chain's address format depends on it bit-for-bit, so here it stays.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let inner = sha256(data);
    let mut hasher = Ripemd160::new();
    hasher.update(inner);
    hasher.finalize().into()
}

/// Hash a merkle node pair without a concatenation buffer.
fn sha256_pair(left: &[u8], right: &[u8]) -> [u8; DIGEST_LENGTH] {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Compute the merkle root of an ordered list of 32-byte leaf digests.
///
/// This reduction is consensus-relevant: the transaction id commits to the
/// operation list only through this root, so the exact rules matter.
///
/// - Zero leaves: the root is `SHA-256("")` — the empty-input sentinel.
/// - One leaf: the root is that digest unchanged, with no extra hashing.
/// - Otherwise, each level pairs adjacent nodes left-to-right and hashes
///   `SHA-256(left || right)`. A level with an odd node count duplicates its
///   last node (pairs it with itself) before hashing.
///
/// Leaves are never reordered or deduplicated — the root is a commitment to
/// the exact sequence the caller supplies.
pub fn merkle_root(leaves: &[[u8; DIGEST_LENGTH]]) -> [u8; DIGEST_LENGTH] {
    if leaves.is_empty() {
        return sha256(b"");
    }

    let mut current_level: Vec<[u8; DIGEST_LENGTH]> = leaves.to_vec();

    while current_level.len() > 1 {
        let mut next_level = Vec::with_capacity((current_level.len() + 1) / 2);

        for chunk in current_level.chunks(2) {
            let left = &chunk[0];
            // Odd number of nodes at this level — the last one is paired
            // with itself.
            let right = if chunk.len() == 2 { &chunk[1] } else { &chunk[0] };
            next_level.push(sha256_pair(left, right));
        }

        current_level = next_level;
    }

    current_level[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_vector() {
        // SHA-256 of the empty string — the canonical test vector everyone
        // should have memorized by now.
        let hash = sha256(b"");
        let expected =
            hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
                .unwrap();
        assert_eq!(hash.as_slice(), expected.as_slice());
    }

    #[test]
    fn sha256_foobar_vector() {
        // This digest doubles as a private key in the WIF tests, so pin it.
        let hash = sha256(b"foobar");
        let expected =
            hex::decode("c3ab8ff13720e8ad9047dd39466b3c8974e592c2fa383d4a3960714caef0c4f2")
                .unwrap();
        assert_eq!(hash.as_slice(), expected.as_slice());
    }

    #[test]
    fn double_sha256_is_sha256_of_sha256() {
        let single = sha256(b"vela");
        let double = double_sha256(b"vela");
        assert_ne!(single, double);
        assert_eq!(double, sha256(&single));
    }

    #[test]
    fn hash160_is_twenty_bytes_and_deterministic() {
        let a = hash160(b"compressed pubkey bytes");
        let b = hash160(b"compressed pubkey bytes");
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
        // And it must actually be RIPEMD-160 over SHA-256, not either alone.
        assert_ne!(a.as_slice(), &sha256(b"compressed pubkey bytes")[..20]);
    }

    #[test]
    fn merkle_root_empty_is_empty_input_sentinel() {
        assert_eq!(merkle_root(&[]), sha256(b""));
    }

    #[test]
    fn merkle_root_single_leaf_passes_through() {
        // One leaf: no extra hashing step. The root IS the digest.
        let leaf = sha256(b"only child");
        assert_eq!(merkle_root(&[leaf]), leaf);
    }

    #[test]
    fn merkle_root_two_leaves() {
        let l = sha256(b"left");
        let r = sha256(b"right");
        assert_eq!(merkle_root(&[l, r]), sha256_pair(&l, &r));
    }

    #[test]
    fn merkle_root_odd_level_duplicates_last_node() {
        let a = sha256(b"a");
        let b = sha256(b"b");
        let c = sha256(b"c");

        let left = sha256_pair(&a, &b);
        let right = sha256_pair(&c, &c); // c paired with itself
        let expected = sha256_pair(&left, &right);

        assert_eq!(merkle_root(&[a, b, c]), expected);
    }

    #[test]
    fn merkle_root_order_matters() {
        // Merkle trees are order-dependent. Swapping leaves changes the
        // root, which is the whole point — the root commits to the exact
        // operation sequence.
        let l1 = sha256(b"first");
        let l2 = sha256(b"second");
        assert_ne!(merkle_root(&[l1, l2]), merkle_root(&[l2, l1]));
    }

    #[test]
    fn merkle_root_deterministic() {
        let leaves: Vec<[u8; 32]> = (0u8..8).map(|i| sha256(&[i])).collect();
        assert_eq!(merkle_root(&leaves), merkle_root(&leaves));
    }
}
