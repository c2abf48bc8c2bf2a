//! # Canonical Wire Encoding
//!
//! Deterministic byte serialization for everything the chain hashes or
//! signs. The rule is simple and absolute: **one value, one encoding**. If
//! two clients can serialize the same transaction header to different bytes,
//! they will compute different transaction ids, and consensus is over.
//!
//! Three codecs live here:
//!
//! - [`canonical`] — the tag/varint field writer that serializes messages
//!   with ascending field numbers and omitted defaults.
//! - [`multihash`] — the self-describing digest container used for every
//!   content identifier (transaction ids, operation merkle roots).
//! - [`nonce`] — the tagged scalar union carried in transaction headers.

pub mod canonical;
pub mod multihash;
pub mod nonce;

pub use canonical::{Canonical, FieldWriter};
pub use multihash::{hash_message, Multihash};
pub use nonce::{decode_nonce, encode_nonce};
