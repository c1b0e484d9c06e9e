//! Randomness sources for mnemonic generation.
//!
//! Generation draws entropy through the `RandomSource` trait so callers
//! can supply hardware tokens, remote signers, or deterministic sources
//! in tests. `OsRandom` is the default, backed by the operating system.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::Bip39Error;

/// Async source of cryptographically secure random bytes.
///
/// Each generation draws all of its entropy in a single call; randomness
/// is never streamed or drawn incrementally.
pub trait RandomSource {
    /// Produce `n` random bytes.
    fn random_bytes(
        &self,
        n: usize,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, Bip39Error>> + Send;
}

/// Randomness from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    async fn random_bytes(&self, n: usize) -> Result<Vec<u8>, Bip39Error> {
        let mut buf = vec![0u8; n];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| Bip39Error::RandomSource(e.to_string()))?;
        Ok(buf)
    }
}
