//! # Address Text Helpers
//!
//! Validation and display for account addresses outside the keypair
//! lifecycle: wallets take addresses as pasted text, and a typo caught here
//! is funds not burned.
//!
//! Validation does a full base58check decode — alphabet, 25-byte length,
//! and the trailing double-SHA-256 checksum — rather than a shape check, so
//! a string that passes is guaranteed to be a real address, not just to
//! look like one.

use crate::config::{ADDRESS_LENGTH, CHECKSUM_LENGTH};
use crate::crypto::hash::double_sha256;
use crate::error::{FormatError, Result};

/// Length of the checksummed address prefix: version byte + hash160.
const ADDRESS_PAYLOAD_LENGTH: usize = ADDRESS_LENGTH - CHECKSUM_LENGTH;

/// Decode and fully validate an address string.
///
/// Failure reasons are distinguishable: [`FormatError::Base58`] for an
/// undecodable string, [`FormatError::AddressLength`] when the decoded form
/// is not exactly 25 bytes, and [`FormatError::ChecksumMismatch`] when the
/// trailing four bytes disagree with the recomputed checksum.
pub fn decode_address(text: &str) -> Result<[u8; ADDRESS_LENGTH]> {
    let decoded = bs58::decode(text)
        .into_vec()
        .map_err(|_| FormatError::Base58)?;
    if !text.is_empty() && decoded.is_empty() {
        return Err(FormatError::Base58.into());
    }

    if decoded.len() != ADDRESS_LENGTH {
        return Err(FormatError::AddressLength(decoded.len()).into());
    }

    let checksum = double_sha256(&decoded[..ADDRESS_PAYLOAD_LENGTH]);
    if checksum[..CHECKSUM_LENGTH] != decoded[ADDRESS_PAYLOAD_LENGTH..] {
        return Err(FormatError::ChecksumMismatch.into());
    }

    let mut address = [0u8; ADDRESS_LENGTH];
    address.copy_from_slice(&decoded);
    Ok(address)
}

/// Whether a string is a structurally valid, checksummed address.
pub fn is_valid_address(text: &str) -> bool {
    decode_address(text).is_ok()
}

/// Format raw address bytes for human-readable output: `0x` plus hex.
///
/// The hex form is for logs and diagnostics; the base58 form remains the
/// interchange format.
pub fn display_address(address: &[u8]) -> String {
    format!("0x{}", hex::encode(address))
}
