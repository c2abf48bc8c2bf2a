//! # Cryptographic Primitives for Vela
//!
//! This module is the foundation of everything security-related in the
//! client core. Every signing operation, every hash, every derived address
//! flows through here.
//!
//! We deliberately chose boring, well-audited cryptography:
//!
//! - **secp256k1 ECDSA** for signatures — recoverable compact form, because
//!   the chain identifies signers by recovering the public key.
//! - **SHA-256** for digests, double-SHA-256 for checksums and merkle nodes.
//! - **RIPEMD-160 over SHA-256** (hash160) to compress public keys into
//!   address payloads.
//!
//! ## A note on "rolling your own crypto"
//!
//! We don't. Everything here is a thin, type-safe wrapper around audited
//! implementations. The only hand-written byte-twiddling is the checksummed
//! text codecs, and those carry pinned test vectors.

pub mod address;
pub mod hash;
pub mod keys;
pub mod wif;

// Re-export the things people actually need so they don't have to memorize
// our module hierarchy.
pub use address::{decode_address, display_address, is_valid_address};
pub use hash::{double_sha256, hash160, merkle_root, sha256};
pub use keys::{recover_public_key, verify_digest, VelaKeypair};
pub use wif::{decode_wif, encode_wif};
