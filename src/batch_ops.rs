//! Parallel derivations over independent requests (`batch-ops` feature).

use rayon::prelude::*;

use crate::aliases::PasswordString;
use crate::crypto::kdf::pbkdf2::Hasher;
use crate::derive::{derive, DerivationResult};
use crate::error::OpenSslKdfError;

/// Parameters of one derivation in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeriveRequest<'a> {
    pub key_size: usize,
    pub iv_size: usize,
    pub salt: Option<&'a [u8]>,
    pub hasher: Option<Hasher>,
}

impl<'a> DeriveRequest<'a> {
    pub const fn new(key_size: usize, iv_size: usize) -> Self {
        Self {
            key_size,
            iv_size,
            salt: None,
            hasher: None,
        }
    }

    pub const fn with_salt(mut self, salt: &'a [u8]) -> Self {
        self.salt = Some(salt);
        self
    }

    pub const fn with_hasher(mut self, hasher: Hasher) -> Self {
        self.hasher = Some(hasher);
        self
    }
}

/// Run every request on the rayon pool; results keep request order.
///
/// Stops at the first error and returns it.
pub fn derive_batch(
    password: &PasswordString,
    requests: &[DeriveRequest<'_>],
) -> Result<Vec<DerivationResult>, OpenSslKdfError> {
    let password = password.expose_secret().as_bytes();
    requests
        .par_iter()
        .map(|req| derive(password, req.key_size, req.iv_size, req.salt, req.hasher))
        .collect()
}
