//! # Error Taxonomy
//!
//! One crate-wide error enum, because callers of this library make decisions
//! on the *kind* of failure, not on which module produced it. A wallet retries
//! a [`Error::Network`] failure, reports a [`Error::Format`] failure to the
//! user verbatim, and treats [`Error::Cryptographic`] as a bug or corrupted
//! key material.
//!
//! All of these are recoverable, typed results. Nothing in this crate panics
//! on bad input — panics are reserved for genuinely unreachable invariant
//! violations.
//!
//! WIF decoding deliberately distinguishes a checksum mismatch from a
//! length/flag mismatch ([`FormatError`] is `PartialEq` for exactly this
//! reason): a truncated paste and a one-character typo are different user
//! mistakes, and the tests pin down which one we detect.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed transport error, carried through [`Error::Network`] verbatim.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed text or wire input (WIF, address, multihash).
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Invalid scalar, signing failure, or key derivation failure.
    #[error("cryptographic failure: {0}")]
    Cryptographic(String),

    /// Canonical serialization or multihash encoding failure.
    #[error("encoding failure: {0}")]
    Encoding(String),

    /// The transaction builder was invoked with missing operations, a missing
    /// key, or an unresolved field and no chain client to resolve it with.
    #[error("invalid builder request: {0}")]
    Request(&'static str),

    /// A chain client call failed. The underlying error is propagated
    /// verbatim, never reclassified — retry policy belongs to the caller.
    #[error("network failure: {0}")]
    Network(#[source] BoxError),

    /// The wire nonce decoded to something other than an unsigned 64-bit
    /// tagged value.
    #[error("invalid nonce: expected an unsigned 64-bit value")]
    InvalidNonce,
}

/// Malformed input, with the specific reason preserved.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The input was not decodable base58.
    #[error("unable to decode base58 string")]
    Base58,

    /// A decoded address was not exactly 25 bytes.
    #[error("malformed address: unexpected decoded length {0}")]
    AddressLength(usize),

    /// A decoded WIF string was neither 37 (uncompressed) nor 38
    /// (compressed) bytes long.
    #[error("malformed private key: unexpected decoded length {0}")]
    WifLength(usize),

    /// A 38-byte WIF payload did not carry the 0x01 compression flag where
    /// one is required.
    #[error("malformed private key: bad compression flag")]
    WifCompressionFlag,

    /// The trailing four checksum bytes did not match the recomputed
    /// double-SHA-256 checksum.
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// A multihash buffer ended before its declared digest length.
    #[error("multihash truncated")]
    MultihashTruncated,

    /// A multihash carried an algorithm code this subsystem does not accept.
    #[error("unsupported multihash algorithm code {0:#x}")]
    UnsupportedHashCode(u64),
}

impl From<secp256k1::Error> for Error {
    fn from(err: secp256k1::Error) -> Self {
        Error::Cryptographic(err.to_string())
    }
}
