//! # Wallet Import Format (WIF) Codec
//!
//! The legacy checksummed text encoding for private keys. The layout is
//! base58check:
//!
//! ```text
//! net_id(1) || private_key(32, left-zero-padded) || [0x01 if compressed] || checksum(4)
//! ```
//!
//! where the checksum is the first four bytes of the double-SHA-256 of
//! everything before it. Any single-character change to the text — prefix,
//! payload, or checksum region — must fail decoding.
//!
//! This codec has to reproduce the historical encoding bit-for-bit; the
//! test vectors at the bottom of this file are non-negotiable.

use crate::config::{CHECKSUM_LENGTH, COMPRESS_MAGIC, PRIVATE_KEY_LENGTH};
use crate::crypto::hash::double_sha256;
use crate::error::{FormatError, Result};

/// Decoded length of an uncompressed WIF payload: net id + key + checksum.
const WIF_UNCOMPRESSED_LENGTH: usize = 1 + PRIVATE_KEY_LENGTH + CHECKSUM_LENGTH;

/// Decoded length of a compressed WIF payload: one extra flag byte.
const WIF_COMPRESSED_LENGTH: usize = WIF_UNCOMPRESSED_LENGTH + 1;

/// Encode a private key into a WIF string.
///
/// Keys shorter than 32 bytes are left-padded with zero bytes so the scalar
/// always occupies exactly 32 bytes of the payload.
pub fn encode_wif(private_key: &[u8], compress: bool, net_id: u8) -> String {
    let mut buf = Vec::with_capacity(WIF_COMPRESSED_LENGTH);
    buf.push(net_id);
    buf.resize(1 + PRIVATE_KEY_LENGTH.saturating_sub(private_key.len()), 0);
    buf.extend_from_slice(private_key);
    if compress {
        buf.push(COMPRESS_MAGIC);
    }

    let checksum = double_sha256(&buf);
    buf.extend_from_slice(&checksum[..CHECKSUM_LENGTH]);

    bs58::encode(buf).into_string()
}

/// Decode a WIF string into the raw 32-byte private key.
///
/// Validation order matters and is part of the contract:
/// 1. base58 decoding itself ([`FormatError::Base58`]),
/// 2. total decoded length, exactly 37 or 38 bytes ([`FormatError::WifLength`]),
/// 3. the compression flag byte on 38-byte payloads
///    ([`FormatError::WifCompressionFlag`]),
/// 4. the trailing checksum ([`FormatError::ChecksumMismatch`]).
///
/// The net id byte is not validated — the chain accepts keys imported from
/// either network prefix, matching the historical behavior.
pub fn decode_wif(wif: &str) -> Result<[u8; PRIVATE_KEY_LENGTH]> {
    let decoded = bs58::decode(wif)
        .into_vec()
        .map_err(|_| FormatError::Base58)?;
    if !wif.is_empty() && decoded.is_empty() {
        return Err(FormatError::Base58.into());
    }

    let compress = match decoded.len() {
        WIF_COMPRESSED_LENGTH => {
            if decoded[1 + PRIVATE_KEY_LENGTH] != COMPRESS_MAGIC {
                return Err(FormatError::WifCompressionFlag.into());
            }
            true
        }
        WIF_UNCOMPRESSED_LENGTH => false,
        other => return Err(FormatError::WifLength(other).into()),
    };

    let payload_len = if compress {
        1 + PRIVATE_KEY_LENGTH + 1
    } else {
        1 + PRIVATE_KEY_LENGTH
    };

    let checksum = double_sha256(&decoded[..payload_len]);
    if checksum[..CHECKSUM_LENGTH] != decoded[payload_len..] {
        return Err(FormatError::ChecksumMismatch.into());
    }

    let mut key = [0u8; PRIVATE_KEY_LENGTH];
    key.copy_from_slice(&decoded[1..1 + PRIVATE_KEY_LENGTH]);
    Ok(key)
}
