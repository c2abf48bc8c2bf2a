//! # Nonce Codec
//!
//! Account nonces travel as serialized tagged unions, not bare integers.
//! The union exists so the nonce type can evolve (the design reserves room
//! for non-scalar nonces later) without changing the header layout; today
//! exactly one variant is valid: a `u64` counter in field 1.
//!
//! The variant tag is **always** written, even for a zero value — union
//! presence is explicit, which is what lets a decoder distinguish "nonce 0"
//! from "some other variant" or garbage.

use crate::encoding::canonical::{read_uvarint, write_uvarint};
use crate::error::{Error, Result};

/// Tag byte for the u64 variant: field 1, varint wire type.
const UINT64_VARIANT_TAG: u64 = 1 << 3;

/// Serialize a u64 nonce into its tagged union form.
pub fn encode_nonce(nonce: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2);
    write_uvarint(&mut buf, UINT64_VARIANT_TAG);
    write_uvarint(&mut buf, nonce);
    buf
}

/// Parse a tagged union nonce back into its u64 value.
///
/// Anything other than a complete, trailing-byte-free u64 variant is an
/// [`Error::InvalidNonce`]: a missing tag, a different variant, truncation,
/// or extra bytes after the value.
pub fn decode_nonce(data: &[u8]) -> Result<u64> {
    let (tag, tag_len) = read_uvarint(data).ok_or(Error::InvalidNonce)?;
    if tag != UINT64_VARIANT_TAG {
        return Err(Error::InvalidNonce);
    }

    let rest = &data[tag_len..];
    let (value, value_len) = read_uvarint(rest).ok_or(Error::InvalidNonce)?;
    if value_len != rest.len() {
        return Err(Error::InvalidNonce);
    }

    Ok(value)
}
