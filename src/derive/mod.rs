// src/derive/mod.rs

//! OpenSSL-style key + IV derivation.
//!
//! Core API: `derive(password, key_size, iv_size, salt, hasher)?`.
//! The pipeline is strictly linear: [`resolve_salt`] → [`stretch`] →
//! [`package`]. Sizes are in 4-byte words.

pub mod salt;
pub mod split;
pub mod stretch;

pub use salt::{resolve_salt, ResolvedSalt};
pub use split::package;
pub use stretch::stretch;

use std::fmt;
use std::io::Write;

use crate::crypto::kdf::pbkdf2::{Hasher, Pbkdf2, Pbkdf2Primitive};
use crate::crypto::rng::{OsSaltSource, SaltSource};
use crate::error::OpenSslKdfError;
use crate::header::write_salted_header;
use crate::utils::{total_words, words_to_bytes};
use crate::words::SecretWords;

/// Key, IV and the salt they were derived with.
///
/// Built only by [`package`]; read-only afterwards. Key and IV are wiped on drop.
pub struct DerivationResult {
    pub(crate) key: SecretWords,
    pub(crate) iv: SecretWords,
    pub(crate) salt: Vec<u8>,
}

impl DerivationResult {
    /// First `key_size` words of the PBKDF2 output.
    #[must_use]
    pub fn key(&self) -> &SecretWords {
        &self.key
    }

    /// The `iv_size` words following the key.
    #[must_use]
    pub fn iv(&self) -> &SecretWords {
        &self.iv
    }

    /// Salt exactly as used for the derivation.
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Take ownership of `(key, iv, salt)`, e.g. to hand them to a cipher.
    #[must_use]
    pub fn into_parts(self) -> (SecretWords, SecretWords, Vec<u8>) {
        (self.key, self.iv, self.salt)
    }

    /// Write the `Salted__` container header for this salt.
    ///
    /// Fails with [`OpenSslKdfError::Header`] unless the salt is 8 bytes.
    pub fn write_header<W: Write>(&self, writer: W) -> Result<(), OpenSslKdfError> {
        write_salted_header(writer, &self.salt)
    }
}

impl fmt::Debug for DerivationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivationResult")
            .field("key", &self.key)
            .field("iv", &self.iv)
            .field("salt_len", &self.salt.len())
            .finish()
    }
}

/// Derive a key and IV with the default PBKDF2 configuration and the OS random source.
///
/// - `key_size`, `iv_size`: word counts (4 bytes each), zero allowed
/// - `salt`: used as-is when present and non-empty; otherwise 8 random bytes
/// - `hasher`: `None` selects SHA-256, the default of [`Pbkdf2`]
///
/// # Example
///
/// ```
/// use openssl_pbkdf2_rs::{derive, Hasher};
///
/// let salt = [1u8, 2, 3, 4, 5, 6, 7, 8];
/// let params = derive("correcthorse", 8, 4, Some(&salt[..]), Some(Hasher::Sha1))?;
/// assert_eq!(params.key().len(), 32);
/// assert_eq!(params.iv().len(), 16);
/// assert_eq!(params.salt(), &salt);
/// # Ok::<(), openssl_pbkdf2_rs::OpenSslKdfError>(())
/// ```
pub fn derive<P>(
    password: &P,
    key_size: usize,
    iv_size: usize,
    salt: Option<&[u8]>,
    hasher: Option<Hasher>,
) -> Result<DerivationResult, OpenSslKdfError>
where
    P: AsRef<[u8]> + ?Sized,
{
    derive_with(
        &Pbkdf2::default(),
        &mut OsSaltSource,
        password.as_ref(),
        key_size,
        iv_size,
        salt,
        hasher,
    )
}

/// [`derive`] with explicit collaborators.
///
/// The random source is consulted only when no usable salt is provided.
pub fn derive_with<K, S>(
    primitive: &K,
    rng: &mut S,
    password: &[u8],
    key_size: usize,
    iv_size: usize,
    salt: Option<&[u8]>,
    hasher: Option<Hasher>,
) -> Result<DerivationResult, OpenSslKdfError>
where
    K: Pbkdf2Primitive + ?Sized,
    S: SaltSource + ?Sized,
{
    let output_words = total_words(key_size, iv_size)?;
    words_to_bytes(output_words)?;
    let salt = resolve_salt(salt.map(<[u8]>::to_vec), rng)?;

    tracing::debug!(
        key_size,
        iv_size,
        salt_len = salt.bytes.len(),
        salt_generated = salt.generated,
        hasher = ?hasher,
        "deriving key and IV"
    );

    let derived = stretch(primitive, password, &salt.bytes, output_words, hasher)?;
    let result = package(derived, key_size, iv_size, salt.bytes)?;

    tracing::debug!(
        key_bytes = result.key.len(),
        iv_bytes = result.iv.len(),
        "key and IV derived"
    );
    Ok(result)
}
