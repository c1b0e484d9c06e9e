//! BIP-39 mnemonic phrases: entropy encoding, checksum validation, and
//! seed derivation.
//!
//! This crate provides the full mnemonic lifecycle:
//! - Bit-string codec for entropy and checksum regrouping
//! - Checksum computation (leading SHA-256 bits)
//! - Word list handling with O(1) reverse lookup (English bundled)
//! - Mnemonic encoding, decoding, and validation
//! - Mnemonic generation from pluggable async randomness
//! - PBKDF2-based seed derivation for HD wallet compatibility

pub mod bits;
pub mod checksum;
pub mod mnemonic;
pub mod rng;
pub mod seed;
pub mod wordlist;

mod error;
pub use error::Bip39Error;
