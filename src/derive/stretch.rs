//! src/derive/stretch.rs

use crate::crypto::kdf::pbkdf2::{Hasher, Pbkdf2Primitive};
use crate::error::OpenSslKdfError;
use crate::words::SecretWords;

/// Run the PBKDF2 primitive for `output_words` words (`key_size + iv_size`).
///
/// The hasher is passed through as given; `None` leaves the choice to the
/// primitive. Primitive errors come back unchanged.
#[inline]
pub fn stretch<K>(
    primitive: &K,
    password: &[u8],
    salt: &[u8],
    output_words: usize,
    hasher: Option<Hasher>,
) -> Result<SecretWords, OpenSslKdfError>
where
    K: Pbkdf2Primitive + ?Sized,
{
    primitive.compute(password, salt, output_words, hasher)
}
