/// Unified error type for all mnemonic operations.
///
/// Covers errors from entropy encoding, mnemonic decoding, word list
/// construction, generation, and hex parsing.
#[derive(Debug, thiserror::Error)]
pub enum Bip39Error {
    #[error("invalid entropy length: {0} bytes (expected 16, 20, 24, 28, or 32)")]
    InvalidEntropyLength(usize),

    #[error("invalid mnemonic length: {0} words")]
    InvalidMnemonicLength(usize),

    #[error("unknown word: {0}")]
    UnknownWord(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid strength: {0} bits (expected a multiple of 32 in 128..=256)")]
    InvalidStrength(usize),

    #[error("invalid word list: {0}")]
    InvalidWordList(String),

    #[error("random source failure: {0}")]
    RandomSource(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl From<hex::FromHexError> for Bip39Error {
    fn from(e: hex::FromHexError) -> Self {
        Bip39Error::InvalidHex(e.to_string())
    }
}
