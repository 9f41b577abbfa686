//! src/builders/openssl_pbkdf2_builder.rs
//! Key + IV derivation builder with explicit hash, iterations and salt

use crate::aliases::PasswordString;
use crate::consts::{AES256_KEY_WORDS, AES_IV_WORDS, DEFAULT_PBKDF2_ITERATIONS, PBKDF2_MIN_ITER};
use crate::crypto::kdf::pbkdf2::{Hasher, Pbkdf2};
use crate::crypto::rng::{OsSaltSource, SaltSource};
use crate::derive::{derive_with, DerivationResult};
use crate::error::OpenSslKdfError;
use crate::header::read_salted_header;
use std::io::Read;

/// OpenSSL-style PBKDF2 key + IV derivation builder
///
/// Defaults: SHA-256, [`DEFAULT_PBKDF2_ITERATIONS`], fresh 8-byte salt per derivation.
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`) and holds no secrets; the
/// password is only borrowed for the duration of a derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenSslPbkdf2Builder {
    iterations: u32,
    hasher: Hasher,
    salt: Option<Vec<u8>>,
}

impl OpenSslPbkdf2Builder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            iterations: DEFAULT_PBKDF2_ITERATIONS,
            hasher: Hasher::default(),
            salt: None,
        }
    }

    /// Set custom iteration count (minimum 1)
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.max(PBKDF2_MIN_ITER);
        self
    }

    #[must_use]
    pub fn with_hasher(mut self, hasher: Hasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Use a fixed salt, any length. An empty salt means "generate one".
    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    #[must_use]
    pub fn salt(&self) -> Option<&[u8]> {
        self.salt.as_deref()
    }

    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub const fn hasher(&self) -> Hasher {
        self.hasher
    }

    /// The primitive this builder derives with.
    #[must_use]
    pub const fn primitive(&self) -> Pbkdf2 {
        Pbkdf2::new(self.iterations, self.hasher)
    }

    /// Derive `key_size` + `iv_size` words using the OS random source for a missing salt.
    pub fn derive(
        &self,
        password: &PasswordString,
        key_size: usize,
        iv_size: usize,
    ) -> Result<DerivationResult, OpenSslKdfError> {
        self.derive_with_source(password, key_size, iv_size, &mut OsSaltSource)
    }

    /// Convenience: AES-256-CBC shape (8-word key, 4-word IV).
    pub fn derive_aes256_cbc(
        &self,
        password: &PasswordString,
    ) -> Result<DerivationResult, OpenSslKdfError> {
        self.derive(password, AES256_KEY_WORDS, AES_IV_WORDS)
    }

    pub fn derive_with_source<S>(
        &self,
        password: &PasswordString,
        key_size: usize,
        iv_size: usize,
        rng: &mut S,
    ) -> Result<DerivationResult, OpenSslKdfError>
    where
        S: SaltSource + ?Sized,
    {
        derive_with(
            &self.primitive(),
            rng,
            password.expose_secret().as_bytes(),
            key_size,
            iv_size,
            self.salt(),
            Some(self.hasher),
        )
    }
}

impl OpenSslPbkdf2Builder {
    /// Re-derive key and IV for a `Salted__` payload with this builder's
    /// iterations and hash.
    ///
    /// The salt comes from the header; any salt set with
    /// [`with_salt`](Self::with_salt) is ignored. `reader` is left positioned
    /// at the ciphertext.
    pub fn derive_from_header<R: Read>(
        &self,
        password: &PasswordString,
        key_size: usize,
        iv_size: usize,
        reader: R,
    ) -> Result<DerivationResult, OpenSslKdfError> {
        let salt = read_salted_header(reader)?;
        derive_with(
            &self.primitive(),
            &mut OsSaltSource,
            password.expose_secret().as_bytes(),
            key_size,
            iv_size,
            Some(&salt.expose_secret()[..]),
            Some(self.hasher),
        )
    }
}

impl Default for OpenSslPbkdf2Builder {
    fn default() -> Self {
        Self::new()
    }
}
