// src/crypto/rng.rs
//! Secure randomness for salt generation
//!
//! [`SaltSource`] is the random-bytes collaborator consumed by the salt
//! resolver. [`OsSaltSource`] reads straight from the operating system via
//! `OsRng`; a failure is reported, never papered over with a weaker source.

use crate::error::OpenSslKdfError;
use rand::{rngs::OsRng, TryRngCore};

/// Cryptographically secure byte source.
pub trait SaltSource {
    /// Fill `dest` entirely or fail with [`OpenSslKdfError::EntropySourceUnavailable`].
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<(), OpenSslKdfError>;

    /// `randomBytes(n)`
    fn random_bytes(&mut self, n: usize) -> Result<Vec<u8>, OpenSslKdfError> {
        let mut bytes = vec![0u8; n];
        self.fill_random(&mut bytes)?;
        Ok(bytes)
    }
}

impl<S: SaltSource + ?Sized> SaltSource for &mut S {
    #[inline(always)]
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<(), OpenSslKdfError> {
        (**self).fill_random(dest)
    }
}

/// Operating-system CSPRNG. Stateless, so every call site can own one.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSaltSource;

impl OsSaltSource {
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }
}

impl SaltSource for OsSaltSource {
    #[inline(always)]
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<(), OpenSslKdfError> {
        let mut rng = OsRng;
        rng.try_fill_bytes(dest).map_err(|e| {
            tracing::warn!(error = %e, "OS random source failed");
            OpenSslKdfError::EntropySourceUnavailable(e.to_string())
        })
    }
}
