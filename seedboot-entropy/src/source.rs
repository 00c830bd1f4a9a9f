//! Random source implementations.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Once,
};

use sodiumoxide::init;
use sodiumoxide::randombytes::randombytes;

use crate::errors::{EntropyError, Result};

/// Uniformly-random 16-bit values, drawn one at a time.
///
/// A draw either yields the next value or fails with
/// [`EntropyError::SourceUnavailable`]; there is no partial result and no
/// retry semantics.
pub trait RandomSource {
    fn next_u16(&mut self) -> Result<u16>;
}

/// Cryptographically strong random source backed by libsodium.
#[derive(Debug, Clone, Copy)]
pub struct SodiumRandomSource;

impl SodiumRandomSource {
    /// Creates the source, initializing libsodium on first use.
    ///
    /// Fails with [`EntropyError::SourceUnavailable`] when the host has no
    /// usable entropy facility (sandboxed or unsupported environment).
    pub fn new() -> Result<Self> {
        if Self::init_sodiumoxide() {
            return Ok(SodiumRandomSource);
        }
        Err(EntropyError::SourceUnavailable)
    }

    // randombytes() requires sodium initialization for thread safety
    fn init_sodiumoxide() -> bool {
        static INIT_SODIUMOXIDE: Once = Once::new();
        static INITIALIZED: AtomicBool = AtomicBool::new(false);

        INIT_SODIUMOXIDE.call_once(|| {
            INITIALIZED.store(init().is_ok(), Ordering::Relaxed);
        });

        INITIALIZED.load(Ordering::Relaxed)
    }
}

impl RandomSource for SodiumRandomSource {
    fn next_u16(&mut self) -> Result<u16> {
        let random_bytes = randombytes(2);
        let mut buf = [0u8; 2];
        buf.copy_from_slice(&random_bytes);
        Ok(u16::from_le_bytes(buf))
    }
}
