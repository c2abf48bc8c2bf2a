//! # Miscellaneous Helpers
//!
//! Small, pure utilities that several subsystems share but that belong to
//! none of them.

use rand::Rng;

use crate::config::RC_ONE;

/// The base58 alphabet: base64 minus the ambiguous `0`, `O`, `I`, `l`.
const BASE58_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Generate a random identifier drawn from the base58 alphabet.
///
/// Used for correlating RPC requests in logs. Takes the RNG explicitly so
/// tests can seed it and pin outputs.
pub fn generate_base58_id<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| BASE58_ALPHABET[rng.gen_range(0..BASE58_ALPHABET.len())] as char)
        .collect()
}

/// Scale an available resource-credit balance by a fixed-point fraction
/// (`RC_ONE` == 1.0), truncating toward zero.
///
/// The multiply is widened to 128 bits so `max_rc` values near `u64::MAX`
/// cannot overflow mid-computation.
pub fn rc_fraction(max_rc: u64, fraction: u64) -> u64 {
    ((max_rc as u128 * fraction as u128) / RC_ONE as u128) as u64
}
