//! # Key Management
//!
//! secp256k1 keypair lifecycle for Vela accounts: generation, import,
//! address derivation, WIF export, and recoverable compact signing.
//!
//! ## Why recoverable signatures?
//!
//! The chain does not ship public keys alongside transactions. Verifiers
//! recover the signer's public key from the 65-byte compact signature and
//! the signed digest, then derive the address from it. That makes the
//! recovery byte consensus-relevant, not a convenience.
//!
//! ## Security considerations
//!
//! - Private keys are never logged. `Debug` prints the address, full stop.
//! - `VelaKeypair` intentionally does NOT implement `Serialize`. Exporting
//!   a private key is a deliberate act: call [`VelaKeypair::to_wif`] or
//!   [`VelaKeypair::private_key_bytes`] explicitly.
//! - Key generation uses the OS RNG. If that is compromised, Vela keys are
//!   the least of your worries.

use std::fmt;

use once_cell::sync::Lazy;
use rand::rngs::OsRng;
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{All, Message, PublicKey, Secp256k1, SecretKey};

use crate::config::{
    ADDRESS_LENGTH, ADDRESS_VERSION, CHECKSUM_LENGTH, COMPACT_SIGNATURE_COMPRESSED_FLAG,
    COMPACT_SIGNATURE_HEADER_BASE, COMPACT_SIGNATURE_LENGTH, COMPRESSED_PUBLIC_KEY_LENGTH,
    PRIVATE_KEY_LENGTH, WIF_VERSION_MAINNET,
};
use crate::crypto::hash::{double_sha256, hash160};
use crate::crypto::wif::{decode_wif, encode_wif};
use crate::error::{Error, Result};

/// A thread-safe, lazily initialized secp256k1 context. Context creation is
/// expensive; doing it once is plenty.
static SECP256K1_CONTEXT: Lazy<Secp256k1<All>> = Lazy::new(Secp256k1::new);

/// A Vela account keypair wrapping a secp256k1 secret key.
///
/// Keys are immutable after creation: generate or import once, then derive
/// addresses and signatures from the same scalar forever.
pub struct VelaKeypair {
    secret_key: SecretKey,
}

impl VelaKeypair {
    /// Generate a fresh keypair using the OS cryptographic RNG.
    ///
    /// Returns a `Result` because entropy-source failure is the one way this
    /// can go wrong, and crypto code doesn't get to assume things are fine.
    pub fn generate() -> Result<Self> {
        let secret_key = SecretKey::new(&mut OsRng);
        Ok(Self { secret_key })
    }

    /// Reconstruct a keypair from raw private key bytes.
    ///
    /// Fails with a cryptographic error if the bytes are not a valid scalar
    /// for the curve (wrong length, zero, or >= the group order).
    pub fn from_bytes(private: &[u8]) -> Result<Self> {
        let secret_key = SecretKey::from_slice(private)?;
        Ok(Self { secret_key })
    }

    /// Reconstruct a keypair from a WIF string.
    pub fn from_wif(wif: &str) -> Result<Self> {
        let key = decode_wif(wif)?;
        Self::from_bytes(&key)
    }

    /// The raw private key bytes. Handle with extreme care.
    pub fn private_key_bytes(&self) -> [u8; PRIVATE_KEY_LENGTH] {
        self.secret_key.secret_bytes()
    }

    /// The private key in compressed mainnet WIF text.
    pub fn to_wif(&self) -> String {
        encode_wif(&self.private_key_bytes(), true, WIF_VERSION_MAINNET)
    }

    /// The derived public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_secret_key(&SECP256K1_CONTEXT, &self.secret_key)
    }

    /// The canonical compressed public key form: parity byte + x-coordinate.
    pub fn public_key_bytes(&self) -> [u8; COMPRESSED_PUBLIC_KEY_LENGTH] {
        self.public_key().serialize()
    }

    /// The compressed public key in base58 text. Note this is the bare key,
    /// not an address — no version byte, no checksum.
    pub fn public_key_base58(&self) -> String {
        bs58::encode(self.public_key_bytes()).into_string()
    }

    /// The raw 25-byte account address:
    /// `version(0x00) || hash160(compressed_pubkey) || checksum4`.
    ///
    /// This fully decoded form (checksum included) is the canonical
    /// in-memory representation; it is what headers and providers carry.
    /// Use [`VelaKeypair::address`] for the base58 display form.
    pub fn address_bytes(&self) -> [u8; ADDRESS_LENGTH] {
        let payload = hash160(&self.public_key_bytes());

        let mut address = [0u8; ADDRESS_LENGTH];
        address[0] = ADDRESS_VERSION;
        address[1..21].copy_from_slice(&payload);

        let checksum = double_sha256(&address[..21]);
        address[21..].copy_from_slice(&checksum[..CHECKSUM_LENGTH]);
        address
    }

    /// The account address in base58check text.
    pub fn address(&self) -> String {
        bs58::encode(self.address_bytes()).into_string()
    }

    /// Sign a 32-byte digest, producing the 65-byte recoverable compact
    /// signature the chain verifies:
    /// `header(27 + 4 + recovery_id) || r(32) || s(32)`.
    ///
    /// The `+4` marks that the signer's public key is compressed, which ours
    /// always is.
    pub fn sign_digest(&self, digest: &[u8]) -> Result<[u8; COMPACT_SIGNATURE_LENGTH]> {
        let message = Message::from_digest_slice(digest)?;
        let signature = SECP256K1_CONTEXT.sign_ecdsa_recoverable(&message, &self.secret_key);
        let (recovery_id, compact) = signature.serialize_compact();

        let mut out = [0u8; COMPACT_SIGNATURE_LENGTH];
        out[0] = COMPACT_SIGNATURE_HEADER_BASE
            + COMPACT_SIGNATURE_COMPRESSED_FLAG
            + recovery_id.to_i32() as u8;
        out[1..].copy_from_slice(&compact);
        Ok(out)
    }
}

impl Clone for VelaKeypair {
    /// Cloning a keypair is allowed but should make you uncomfortable.
    /// Every copy of a private key is another thing to protect.
    fn clone(&self) -> Self {
        Self {
            secret_key: self.secret_key,
        }
    }
}

impl fmt::Debug for VelaKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print secret key material in debug output. Not even
        // "partially" — a partial leak is still a leak.
        write!(f, "VelaKeypair(address={})", self.address())
    }
}

impl PartialEq for VelaKeypair {
    /// Two keypairs are equal if their public keys match. Comparing secret
    /// material in a non-constant-time way is a bad habit, and for identity
    /// purposes the public key is what matters.
    fn eq(&self, other: &Self) -> bool {
        self.public_key_bytes() == other.public_key_bytes()
    }
}

impl Eq for VelaKeypair {}

/// Recover the signer's public key from a 65-byte recoverable compact
/// signature and the digest it signed.
///
/// This is the verifier side of [`VelaKeypair::sign_digest`] and the reason
/// transactions don't carry public keys at all.
pub fn recover_public_key(digest: &[u8], signature: &[u8]) -> Result<PublicKey> {
    if signature.len() != COMPACT_SIGNATURE_LENGTH {
        return Err(Error::Cryptographic(format!(
            "compact signature must be {COMPACT_SIGNATURE_LENGTH} bytes, got {}",
            signature.len()
        )));
    }

    let header = signature[0];
    if header < COMPACT_SIGNATURE_HEADER_BASE {
        return Err(Error::Cryptographic(format!(
            "invalid compact signature header byte {header:#x}"
        )));
    }
    let recovery_id = RecoveryId::from_i32(((header - COMPACT_SIGNATURE_HEADER_BASE) & 0x03) as i32)?;

    let message = Message::from_digest_slice(digest)?;
    let recoverable = RecoverableSignature::from_compact(&signature[1..], recovery_id)?;
    let public_key = SECP256K1_CONTEXT.recover_ecdsa(&message, &recoverable)?;
    Ok(public_key)
}

/// Verify a recoverable compact signature over `digest` against an expected
/// public key, under standard (non-recoverable) ECDSA verification.
pub fn verify_digest(public_key: &PublicKey, digest: &[u8], signature: &[u8]) -> Result<()> {
    if signature.len() != COMPACT_SIGNATURE_LENGTH {
        return Err(Error::Cryptographic(format!(
            "compact signature must be {COMPACT_SIGNATURE_LENGTH} bytes, got {}",
            signature.len()
        )));
    }

    let header = signature[0];
    let recovery_id = RecoveryId::from_i32(
        ((header.wrapping_sub(COMPACT_SIGNATURE_HEADER_BASE)) & 0x03) as i32,
    )?;
    let message = Message::from_digest_slice(digest)?;
    let standard = RecoverableSignature::from_compact(&signature[1..], recovery_id)?.to_standard();

    SECP256K1_CONTEXT
        .verify_ecdsa(&message, &standard, public_key)
        .map_err(|_| Error::Cryptographic("signature verification failed".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash::sha256;

    #[test]
    fn generate_produces_valid_keypair() {
        let kp = VelaKeypair::generate().unwrap();
        assert_eq!(kp.public_key_bytes().len(), COMPRESSED_PUBLIC_KEY_LENGTH);
        assert_eq!(kp.private_key_bytes().len(), PRIVATE_KEY_LENGTH);
    }

    #[test]
    fn two_generated_keypairs_differ() {
        let a = VelaKeypair::generate().unwrap();
        let b = VelaKeypair::generate().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn from_bytes_roundtrip() {
        let kp = VelaKeypair::generate().unwrap();
        let restored = VelaKeypair::from_bytes(&kp.private_key_bytes()).unwrap();
        assert_eq!(kp, restored);
    }

    #[test]
    fn invalid_scalars_are_rejected() {
        // Zero is not a valid secp256k1 scalar, and neither is a truncated one.
        assert!(VelaKeypair::from_bytes(&[0u8; 32]).is_err());
        assert!(VelaKeypair::from_bytes(&[1u8; 16]).is_err());
    }

    #[test]
    fn known_key_derives_known_address() {
        // Pinned vector: this WIF must derive exactly this 25-byte address,
        // confirming version(0x00) + hash160 + checksum4 derivation.
        let kp =
            VelaKeypair::from_wif("5J1F7GHadZG3sCCKHCwg8Jvys9xUbFsjLnGec4H125Ny1V9nR6V").unwrap();
        let expected = [
            0x00, 0xf5, 0x4a, 0x58, 0x51, 0xe9, 0x37, 0x2b, 0x87, 0x81, 0x0a, 0x8e, 0x60, 0xcd,
            0xd2, 0xe7, 0xcf, 0xd8, 0x0b, 0x6e, 0x31, 0xc7, 0xf1, 0x8f, 0xe8,
        ];
        assert_eq!(kp.address_bytes(), expected);
    }

    #[test]
    fn compressed_wif_and_address_vectors() {
        // The same key imported from uncompressed WIF text re-exports as the
        // compressed form, and both derive the same address text.
        let kp =
            VelaKeypair::from_wif("5JtU2c2MHKb8xSeNvsZJpxZRXeRg6iq6uwc6EUtDA9zsWM6B4c5").unwrap();
        assert_eq!(
            kp.to_wif(),
            "L1xAJ5axX33g7iBynn9bggE7GGBuaFdK6g1t6W52fQiRvQi73evQ"
        );
        assert_eq!(kp.address(), "13Sqw4TrwdZ8RZ9UVfqqA2i3mrbeumcWba");

        let reimported = VelaKeypair::from_wif(&kp.to_wif()).unwrap();
        assert_eq!(reimported.address(), "13Sqw4TrwdZ8RZ9UVfqqA2i3mrbeumcWba");
    }

    #[test]
    fn address_bytes_carry_valid_checksum() {
        let kp = VelaKeypair::generate().unwrap();
        let address = kp.address_bytes();
        let checksum = double_sha256(&address[..21]);
        assert_eq!(&address[21..], &checksum[..CHECKSUM_LENGTH]);
        assert_eq!(address[0], ADDRESS_VERSION);
    }

    #[test]
    fn sign_and_recover_roundtrip() {
        let kp = VelaKeypair::generate().unwrap();
        let digest = sha256(b"sign me");

        let signature = kp.sign_digest(&digest).unwrap();
        assert_eq!(signature.len(), COMPACT_SIGNATURE_LENGTH);

        let recovered = recover_public_key(&digest, &signature).unwrap();
        assert_eq!(recovered, kp.public_key());
    }

    #[test]
    fn signature_verifies_under_standard_ecdsa() {
        let kp = VelaKeypair::generate().unwrap();
        let digest = sha256(b"standard verification");
        let signature = kp.sign_digest(&digest).unwrap();

        assert!(verify_digest(&kp.public_key(), &digest, &signature).is_ok());
    }

    #[test]
    fn wrong_key_fails_verification() {
        let signer = VelaKeypair::generate().unwrap();
        let other = VelaKeypair::generate().unwrap();
        let digest = sha256(b"wrong key");
        let signature = signer.sign_digest(&digest).unwrap();

        assert!(verify_digest(&other.public_key(), &digest, &signature).is_err());
    }

    #[test]
    fn tampered_digest_fails_verification() {
        let kp = VelaKeypair::generate().unwrap();
        let signature = kp.sign_digest(&sha256(b"original")).unwrap();

        assert!(verify_digest(&kp.public_key(), &sha256(b"tampered"), &signature).is_err());
    }

    #[test]
    fn signature_header_marks_compressed_key() {
        let kp = VelaKeypair::generate().unwrap();
        let signature = kp.sign_digest(&sha256(b"header check")).unwrap();
        let header = signature[0];
        let base = COMPACT_SIGNATURE_HEADER_BASE + COMPACT_SIGNATURE_COMPRESSED_FLAG;
        assert!((base..base + 4).contains(&header));
    }

    #[test]
    fn signing_rejects_non_digest_input() {
        let kp = VelaKeypair::generate().unwrap();
        assert!(kp.sign_digest(b"too short").is_err());
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let kp = VelaKeypair::generate().unwrap();
        let debug_str = format!("{kp:?}");
        assert!(debug_str.starts_with("VelaKeypair(address="));
        assert!(!debug_str.contains(&hex::encode(kp.private_key_bytes())));
    }
}
