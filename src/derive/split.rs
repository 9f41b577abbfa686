//! src/derive/split.rs
//! Split PBKDF2 output into key || IV and bundle it with the salt

use crate::derive::DerivationResult;
use crate::error::OpenSslKdfError;
use crate::utils::words_to_bytes;
use crate::words::SecretWords;

/// Partition `derived` at the `key_size`-word boundary.
///
/// `derived` must hold exactly `(key_size + iv_size) * 4` bytes; anything
/// else is a [`LengthMismatch`](OpenSslKdfError::LengthMismatch) and nothing
/// is truncated or padded.
///
/// The key keeps the whole derived buffer as its backing store with its
/// significant length lowered to `key_size * 4`. The IV is copied out of the
/// trailing `iv_size * 4` bytes.
pub fn package(
    mut derived: SecretWords,
    key_size: usize,
    iv_size: usize,
    salt: Vec<u8>,
) -> Result<DerivationResult, OpenSslKdfError> {
    let key_len = words_to_bytes(key_size)?;
    let iv_len = words_to_bytes(iv_size)?;
    let expected = key_len
        .checked_add(iv_len)
        .ok_or_else(|| OpenSslKdfError::InvalidSize("key + iv byte length overflows".into()))?;

    if derived.len() != expected {
        tracing::warn!(
            expected,
            actual = derived.len(),
            "PBKDF2 output does not match requested key + IV length"
        );
        return Err(OpenSslKdfError::LengthMismatch {
            expected,
            actual: derived.len(),
        });
    }

    let iv = derived.copy_range(key_len..expected)?;
    derived.clamp(key_len)?;

    Ok(DerivationResult {
        key: derived,
        iv,
        salt,
    })
}
