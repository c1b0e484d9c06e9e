//! Mnemonic encoding, decoding, validation, and generation.
//!
//! Entropy maps to a sentence by appending a SHA-256 checksum (one bit
//! per 32 entropy bits) and reading the combined bits as 11-bit word
//! indices. Decoding reverses the mapping and verifies the checksum.
//! Generation draws fresh entropy from a [`RandomSource`] and encodes it.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bits::{bits_to_bytes, bytes_to_bits, pad_bits};
use crate::checksum::checksum_bits;
use crate::rng::{OsRandom, RandomSource};
use crate::seed::{mnemonic_to_seed, SEED_LENGTH};
use crate::wordlist::WordList;
use crate::Bip39Error;

/// Entropy lengths in bytes accepted for encoding.
pub const VALID_ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// Bits consumed per mnemonic word.
pub const BITS_PER_WORD: usize = 11;

/// Minimum generation strength in bits.
pub const MIN_STRENGTH: usize = 128;

/// Maximum generation strength in bits.
pub const MAX_STRENGTH: usize = 256;

/// Default generation strength in bits (12 words).
pub const DEFAULT_STRENGTH: usize = 128;

/// Encode entropy as a mnemonic sentence.
///
/// Appends the checksum bits to the entropy bits and maps each 11-bit
/// group to a word. 16/20/24/28/32 bytes of entropy produce sentences of
/// 12/15/18/21/24 words.
///
/// # Arguments
/// * `entropy` - 16, 20, 24, 28, or 32 bytes of entropy.
/// * `wordlist` - The word list to encode against.
///
/// # Returns
/// The sentence with words joined by single spaces, or
/// `InvalidEntropyLength` for any other entropy size.
pub fn entropy_to_mnemonic(entropy: &[u8], wordlist: &WordList) -> Result<String, Bip39Error> {
    if !VALID_ENTROPY_LENGTHS.contains(&entropy.len()) {
        return Err(Bip39Error::InvalidEntropyLength(entropy.len()));
    }

    let mut bits = bytes_to_bits(entropy);
    bits.push_str(&checksum_bits(entropy));

    let words: Vec<&str> = bits
        .as_bytes()
        .chunks(BITS_PER_WORD)
        .map(|chunk| {
            let index = chunk
                .iter()
                .fold(0usize, |acc, &b| (acc << 1) | usize::from(b == b'1'));
            wordlist
                .word_at(index)
                .expect("an 11-bit index is always within a 2048-word list")
        })
        .collect();

    Ok(words.join(" "))
}

/// Decode a mnemonic sentence back to its entropy.
///
/// Splits on Unicode whitespace, so extra spacing between words is
/// tolerated. Errors are reported in a fixed order: word count first,
/// then list membership (first offending word), then checksum.
///
/// # Arguments
/// * `mnemonic` - The sentence to decode.
/// * `wordlist` - The word list to decode against.
///
/// # Returns
/// The entropy bytes, or `InvalidMnemonicLength` / `UnknownWord` /
/// `ChecksumMismatch`.
pub fn mnemonic_to_entropy(mnemonic: &str, wordlist: &WordList) -> Result<Vec<u8>, Bip39Error> {
    let words: Vec<&str> = mnemonic.split_whitespace().collect();
    if words.is_empty() || words.len() % 3 != 0 {
        return Err(Bip39Error::InvalidMnemonicLength(words.len()));
    }

    let mut bits = String::with_capacity(words.len() * BITS_PER_WORD);
    for word in &words {
        let index = wordlist
            .index_of(word)
            .ok_or_else(|| Bip39Error::UnknownWord(word.to_string()))?;
        bits.push_str(&pad_bits(index as usize, BITS_PER_WORD));
    }

    // 32 entropy bits per 33 total bits; the remainder is the checksum.
    let divider = bits.len() / 33 * 32;
    let entropy = bits_to_bytes(&bits[..divider]);
    if checksum_bits(&entropy) != bits[divider..] {
        return Err(Bip39Error::ChecksumMismatch);
    }

    Ok(entropy)
}

/// Check whether a sentence is a valid mnemonic.
///
/// # Arguments
/// * `mnemonic` - The sentence to check.
/// * `wordlist` - The word list to check against.
///
/// # Returns
/// `true` iff the sentence decodes successfully.
pub fn validate_mnemonic(mnemonic: &str, wordlist: &WordList) -> bool {
    mnemonic_to_entropy(mnemonic, wordlist).is_ok()
}

/// Generate a fresh mnemonic from a randomness source.
///
/// Draws `strength / 8` bytes in a single call and encodes them.
///
/// # Arguments
/// * `strength` - Entropy size in bits; a multiple of 32 in `128..=256`.
/// * `rng` - The randomness source.
/// * `wordlist` - The word list to encode against.
///
/// # Returns
/// A [`Mnemonic`], or `InvalidStrength` / `RandomSource`.
pub async fn generate_mnemonic(
    strength: usize,
    rng: &impl RandomSource,
    wordlist: &WordList,
) -> Result<Mnemonic, Bip39Error> {
    if strength % 32 != 0 || !(MIN_STRENGTH..=MAX_STRENGTH).contains(&strength) {
        return Err(Bip39Error::InvalidStrength(strength));
    }
    let entropy = rng.random_bytes(strength / 8).await?;
    Mnemonic::from_entropy(&entropy, wordlist)
}

/// A validated mnemonic: canonical sentence plus the entropy it encodes.
///
/// Constructed only through validating paths, so holding a `Mnemonic`
/// guarantees the sentence and entropy agree. The stored sentence is
/// whitespace canonical (single spaces, no leading or trailing space).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mnemonic {
    phrase: String,
    entropy: Vec<u8>,
}

impl Mnemonic {
    /// Encode entropy into a `Mnemonic`.
    ///
    /// # Arguments
    /// * `entropy` - 16, 20, 24, 28, or 32 bytes of entropy.
    /// * `wordlist` - The word list to encode against.
    ///
    /// # Returns
    /// `Ok(Mnemonic)`, or `InvalidEntropyLength`.
    pub fn from_entropy(entropy: &[u8], wordlist: &WordList) -> Result<Self, Bip39Error> {
        let phrase = entropy_to_mnemonic(entropy, wordlist)?;
        Ok(Mnemonic {
            phrase,
            entropy: entropy.to_vec(),
        })
    }

    /// Encode hex-encoded entropy into a `Mnemonic`.
    ///
    /// # Arguments
    /// * `entropy_hex` - Hex string of a valid entropy length.
    /// * `wordlist` - The word list to encode against.
    ///
    /// # Returns
    /// `Ok(Mnemonic)`, or `InvalidHex` / `InvalidEntropyLength`.
    pub fn from_entropy_hex(entropy_hex: &str, wordlist: &WordList) -> Result<Self, Bip39Error> {
        let entropy = hex::decode(entropy_hex)?;
        Mnemonic::from_entropy(&entropy, wordlist)
    }

    /// Parse and validate a mnemonic sentence.
    ///
    /// The stored phrase is canonicalized: words joined by single spaces
    /// regardless of the input spacing.
    ///
    /// # Arguments
    /// * `mnemonic` - The sentence to parse.
    /// * `wordlist` - The word list to validate against.
    ///
    /// # Returns
    /// `Ok(Mnemonic)`, or the decode error.
    pub fn parse(mnemonic: &str, wordlist: &WordList) -> Result<Self, Bip39Error> {
        let entropy = mnemonic_to_entropy(mnemonic, wordlist)?;
        let phrase = mnemonic.split_whitespace().collect::<Vec<_>>().join(" ");
        Ok(Mnemonic { phrase, entropy })
    }

    /// Generate a 12-word English mnemonic from operating system randomness.
    ///
    /// # Returns
    /// A fresh [`Mnemonic`], or `RandomSource` on entropy failure.
    pub async fn generate() -> Result<Self, Bip39Error> {
        generate_mnemonic(DEFAULT_STRENGTH, &OsRandom, WordList::english()).await
    }

    /// The canonical sentence.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Number of words in the sentence.
    pub fn word_count(&self) -> usize {
        self.phrase.split(' ').count()
    }

    /// The entropy bytes the sentence encodes.
    pub fn entropy(&self) -> &[u8] {
        &self.entropy
    }

    /// The entropy hex encoded.
    pub fn entropy_hex(&self) -> String {
        hex::encode(&self.entropy)
    }

    /// Derive the 64-byte seed for this mnemonic.
    ///
    /// # Arguments
    /// * `passphrase` - Optional passphrase.
    ///
    /// # Returns
    /// The PBKDF2-HMAC-SHA512 seed.
    pub fn to_seed(&self, passphrase: Option<&str>) -> [u8; SEED_LENGTH] {
        mnemonic_to_seed(&self.phrase, passphrase)
    }

    /// Consume the mnemonic, returning the canonical sentence.
    pub fn into_phrase(self) -> String {
        self.phrase
    }
}

/// Display the canonical sentence.
impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.phrase)
    }
}

/// Serialize as the sentence string.
impl Serialize for Mnemonic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.phrase)
    }
}

/// Deserialize from a sentence string, validating against the English list.
impl<'de> Deserialize<'de> for Mnemonic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Mnemonic::parse(&s, WordList::english()).map_err(serde::de::Error::custom)
    }
}
