//! Checksum computation for mnemonic encoding.
//!
//! The checksum is the leading bits of the SHA-256 digest of the entropy,
//! one bit per 32 bits of entropy. Appending it to the entropy bits makes
//! the combined length divisible by 11.

use sha2::{Digest, Sha256};

use crate::bits::bytes_to_bits;

/// Compute the checksum bits for a block of entropy.
///
/// Returns the first `entropy.len() * 8 / 32` bits of `SHA-256(entropy)`
/// as a bit string. Defined for any input length; callers enforce the
/// entropy-length policy.
///
/// # Arguments
/// * `entropy` - The entropy bytes.
///
/// # Returns
/// A bit string of length `entropy.len() * 8 / 32`.
pub fn checksum_bits(entropy: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(entropy);
    let hash: [u8; 32] = hasher.finalize().into();
    let checksum_len = entropy.len() * 8 / 32;
    let mut bits = bytes_to_bits(&hash);
    bits.truncate(checksum_len);
    bits
}
