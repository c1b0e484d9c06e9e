//! Seed derivation from mnemonic sentences.
//!
//! Stretches a mnemonic (plus optional passphrase) into a 64-byte seed
//! with PBKDF2-HMAC-SHA512 at 2048 rounds. The passphrase is NFKD
//! normalized before entering the salt; the sentence itself is used as
//! given. Derivation never validates the sentence, so any string yields
//! a seed.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;

/// PBKDF2 iteration count.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Derived seed length in bytes.
pub const SEED_LENGTH: usize = 64;

/// Constant prefix of the PBKDF2 salt.
const SALT_PREFIX: &str = "mnemonic";

/// Build the PBKDF2 salt for a passphrase.
///
/// The salt is `"mnemonic"` followed by the NFKD-normalized passphrase.
///
/// # Arguments
/// * `passphrase` - The passphrase; may be empty.
///
/// # Returns
/// The salt string.
pub fn salt(passphrase: &str) -> String {
    let normalized: String = passphrase.nfkd().collect();
    format!("{SALT_PREFIX}{normalized}")
}

/// Derive a 64-byte seed from a mnemonic sentence.
///
/// Runs PBKDF2-HMAC-SHA512 for 2048 rounds over the sentence's UTF-8
/// bytes and the passphrase salt. `None` and `Some("")` produce the same
/// seed.
///
/// # Arguments
/// * `mnemonic` - The mnemonic sentence.
/// * `passphrase` - Optional passphrase.
///
/// # Returns
/// The 64-byte seed.
pub fn mnemonic_to_seed(mnemonic: &str, passphrase: Option<&str>) -> [u8; SEED_LENGTH] {
    let salt = salt(passphrase.unwrap_or(""));
    let mut seed = [0u8; SEED_LENGTH];
    pbkdf2_hmac::<Sha512>(
        mnemonic.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut seed,
    );
    seed
}

/// Derive a seed and return it hex encoded.
///
/// # Arguments
/// * `mnemonic` - The mnemonic sentence.
/// * `passphrase` - Optional passphrase.
///
/// # Returns
/// The seed as a 128-character hex string.
pub fn mnemonic_to_seed_hex(mnemonic: &str, passphrase: Option<&str>) -> String {
    hex::encode(mnemonic_to_seed(mnemonic, passphrase))
}
