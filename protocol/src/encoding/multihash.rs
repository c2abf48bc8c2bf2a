//! # Multihash Content Identifiers
//!
//! Every digest the chain passes around — transaction ids, operation merkle
//! roots — travels in a self-describing multihash envelope:
//!
//! ```text
//! <code varint> <digest-length varint> <digest bytes>
//! ```
//!
//! Self-description is what lets the hash algorithm evolve without a format
//! break. For now exactly one algorithm is in the allow-list (SHA2-256,
//! registry code 0x12); a decoder that accepted unknown codes would defeat
//! the point of validation, so it doesn't.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{DIGEST_LENGTH, MULTIHASH_SHA2_256};
use crate::crypto::hash::sha256;
use crate::encoding::canonical::{read_uvarint, write_uvarint, Canonical};
use crate::error::{FormatError, Result};

/// A self-describing digest: hash algorithm code plus the raw digest bytes.
///
/// Hashable and comparable so it can key lookup tables of pending
/// transactions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Multihash {
    code: u64,
    digest: Vec<u8>,
}

impl Multihash {
    /// Wrap a 32-byte SHA2-256 digest.
    pub fn sha2_256(digest: [u8; DIGEST_LENGTH]) -> Self {
        Self {
            code: MULTIHASH_SHA2_256,
            digest: digest.to_vec(),
        }
    }

    /// The hash algorithm registry code.
    pub fn code(&self) -> u64 {
        self.code
    }

    /// The raw digest bytes, without the envelope.
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Serialize to the binary envelope form.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(2 + self.digest.len());
        write_uvarint(&mut buf, self.code);
        write_uvarint(&mut buf, self.digest.len() as u64);
        buf.extend_from_slice(&self.digest);
        buf
    }

    /// Parse a binary multihash envelope.
    ///
    /// Strict by design: the code must be SHA2-256, the declared length must
    /// be 32, and the digest must be exactly as long as declared with no
    /// trailing bytes.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let (code, code_len) = read_uvarint(data).ok_or(FormatError::MultihashTruncated)?;
        if code != MULTIHASH_SHA2_256 {
            return Err(FormatError::UnsupportedHashCode(code).into());
        }

        let rest = &data[code_len..];
        let (digest_len, len_len) = read_uvarint(rest).ok_or(FormatError::MultihashTruncated)?;
        if digest_len as usize != DIGEST_LENGTH {
            return Err(FormatError::MultihashTruncated.into());
        }

        let digest = &rest[len_len..];
        if digest.len() != DIGEST_LENGTH {
            return Err(FormatError::MultihashTruncated.into());
        }

        Ok(Self {
            code,
            digest: digest.to_vec(),
        })
    }

    /// The display form: `0x` followed by the hex of the full envelope.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.encode()))
    }
}

impl fmt::Display for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Canonically serialize a message and wrap its SHA2-256 digest.
///
/// This is the content-identifier function: every operation digest and, via
/// the header, every transaction id comes from here.
pub fn hash_message<M: Canonical>(message: &M) -> Result<Multihash> {
    let bytes = message.canonical_bytes()?;
    Ok(Multihash::sha2_256(sha256(&bytes)))
}
