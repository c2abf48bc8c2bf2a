//! # Protocol Configuration & Constants
//!
//! Every magic number in the Vela client core lives here. If you're
//! hardcoding a constant somewhere else, you're doing it wrong and you owe
//! the team coffee.
//!
//! Most of these values are consensus-relevant or wire-relevant: they define
//! the exact bytes of addresses, WIF strings, multihashes, and transaction
//! ids. Changing them after mainnet launch is somewhere between "difficult"
//! and "career-ending", so choose wisely during devnet.

// ---------------------------------------------------------------------------
// Address & WIF Parameters
// ---------------------------------------------------------------------------

/// Version byte prepended to the hash160 payload of an address.
/// 0x00 is the classic legacy pay-to-pubkey-hash prefix, which is why Vela
/// mainnet addresses start with `1` in base58.
pub const ADDRESS_VERSION: u8 = 0x00;

/// Network id byte prepended to a private key in WIF text. 0x80 marks a
/// mainnet private key; the leading `5`/`K`/`L` you see in WIF strings
/// falls out of this byte.
pub const WIF_VERSION_MAINNET: u8 = 0x80;

/// Trailing flag byte in a WIF payload marking that the corresponding
/// public key is the compressed 33-byte form.
pub const COMPRESS_MAGIC: u8 = 0x01;

/// Length of the truncated double-SHA-256 checksum in base58check payloads.
pub const CHECKSUM_LENGTH: usize = 4;

/// A raw address: version byte + 20-byte hash160 + 4-byte checksum.
pub const ADDRESS_LENGTH: usize = 25;

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// secp256k1 private keys are 256-bit scalars.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Compressed public key: 1 parity byte + 32-byte x-coordinate.
pub const COMPRESSED_PUBLIC_KEY_LENGTH: usize = 33;

/// Recoverable compact signature: 1 recovery byte + 32-byte r + 32-byte s.
pub const COMPACT_SIGNATURE_LENGTH: usize = 65;

/// Base value of the compact signature recovery byte. The recovery id
/// (0..=3) and the compressed-key offset (+4) are added on top. Inherited
/// from the legacy signmessage format; the chain verifies against it, so
/// it is not ours to change.
pub const COMPACT_SIGNATURE_HEADER_BASE: u8 = 27;

/// Offset added to the recovery byte when the signing key's public form
/// is compressed. We always sign with compressed keys.
pub const COMPACT_SIGNATURE_COMPRESSED_FLAG: u8 = 4;

/// SHA-256 (and therefore hash160's inner hash) produces 32-byte digests.
pub const DIGEST_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Multihash Parameters
// ---------------------------------------------------------------------------

/// The multihash registry code for SHA2-256. The only algorithm this
/// subsystem emits or accepts.
pub const MULTIHASH_SHA2_256: u64 = 0x12;

// ---------------------------------------------------------------------------
// Resource Credits
// ---------------------------------------------------------------------------

/// Number of fractional digits in resource-credit arithmetic. An RC
/// fraction of `1.0` is represented as `10^RC_PRECISION`.
pub const RC_PRECISION: u32 = 8;

/// The fixed-point representation of a 1.0 RC fraction.
pub const RC_ONE: u64 = 10u64.pow(RC_PRECISION);
