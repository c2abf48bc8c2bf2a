// Copyright (c) 2026 Vela Labs. MIT License.
// See LICENSE for details.

//! # Vela Protocol — Client Core Library
//!
//! The cryptographic heart of the Vela blockchain client: key management,
//! address derivation, legacy checksummed key text (WIF), content-addressed
//! identifiers (multihash), and deterministic transaction construction.
//!
//! Everything in this crate lives or dies by byte-exact determinism. A
//! transaction's identity is the hash of its canonically serialized header,
//! and the header embeds a merkle root over the canonical bytes of every
//! operation. One byte of divergence and the network no longer agrees on
//! what you signed.
//!
//! ## Architecture
//!
//! The crate is split into modules that mirror the actual concerns of a
//! transaction-signing client:
//!
//! - **crypto** — secp256k1 keypairs, WIF codec, hashing, merkle roots.
//! - **encoding** — canonical serialization, multihash, the nonce codec.
//! - **transaction** — header/operation types, the builder, and signing.
//! - **rpc** — the chain-state provider contract the builder consumes.
//! - **config** — protocol constants and network parameters.
//! - **error** — the crate-wide error taxonomy.
//!
//! ## Design Philosophy
//!
//! 1. Determinism over convenience. Serde never decides field order here.
//! 2. No unsafe code in crypto paths.
//! 3. Typed, recoverable errors everywhere. Nothing aborts the process.
//! 4. If it touches consensus bytes, it has a test vector.

pub mod config;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod rpc;
pub mod transaction;
pub mod util;

pub use error::{Error, FormatError, Result};
