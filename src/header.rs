//! # Salted Header
//!
//! OpenSSL `enc` (and CryptoJS' OpenSSL formatter) prefix salted ciphertext
//! with a 16-byte header: the ASCII magic `Salted__` followed by the 8-byte
//! salt. The rest of the payload is ciphertext and is not touched here.

use crate::aliases::{PasswordString, Salt8};
use crate::consts::{OPENSSL_SALTED_MAGIC, SALTED_HEADER_LEN, SALT_LEN};
use crate::crypto::kdf::pbkdf2::Hasher;
use crate::derive::{derive, DerivationResult};
use crate::error::OpenSslKdfError;
use std::io::{Read, Write};

/// Write `Salted__` followed by `salt`.
///
/// The header has a fixed 8-byte slot, so any other salt length is rejected
/// with [`OpenSslKdfError::Header`] before anything is written.
pub fn write_salted_header<W: Write>(mut writer: W, salt: &[u8]) -> Result<(), OpenSslKdfError> {
    if salt.len() != SALT_LEN {
        return Err(OpenSslKdfError::Header(format!(
            "salt must be {SALT_LEN} bytes for a Salted__ header, got {}",
            salt.len()
        )));
    }
    writer.write_all(&OPENSSL_SALTED_MAGIC)?;
    writer.write_all(salt)?;
    Ok(())
}

/// Read the 16-byte header and return its salt.
///
/// # Errors
///
/// - [`OpenSslKdfError::Io`] - fewer than 16 bytes available, or a read error
/// - [`OpenSslKdfError::Header`] - the payload does not start with `Salted__`
///
/// # Example
///
/// ```
/// use openssl_pbkdf2_rs::read_salted_header;
/// use std::io::Cursor;
///
/// let salt = read_salted_header(Cursor::new(b"Salted__\x01\x02\x03\x04\x05\x06\x07\x08"))?;
/// assert_eq!(salt.expose_secret(), &[1, 2, 3, 4, 5, 6, 7, 8]);
/// # Ok::<(), openssl_pbkdf2_rs::OpenSslKdfError>(())
/// ```
pub fn read_salted_header<R: Read>(mut reader: R) -> Result<Salt8, OpenSslKdfError> {
    let mut header = [0u8; SALTED_HEADER_LEN];
    reader.read_exact(&mut header)?;

    split_salted_header(&header)
        .map(|(salt, _)| salt)
        .ok_or_else(|| OpenSslKdfError::Header("missing Salted__ magic".into()))
}

/// Split an in-memory payload into its salt and the bytes after the header.
///
/// Returns `None` for payloads without the magic (unsalted legacy output)
/// or too short to hold a full header.
pub fn split_salted_header(payload: &[u8]) -> Option<(Salt8, &[u8])> {
    if payload.len() < SALTED_HEADER_LEN || payload[..8] != OPENSSL_SALTED_MAGIC {
        return None;
    }
    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&payload[8..SALTED_HEADER_LEN]);
    Some((Salt8::new(salt), &payload[SALTED_HEADER_LEN..]))
}

/// Re-derive key and IV for a salted payload.
///
/// Reads the header from `reader` (leaving it positioned at the ciphertext)
/// and derives with the stored salt and the default PBKDF2 configuration.
/// Payloads produced with custom iterations go through
/// [`OpenSslPbkdf2Builder::derive_from_header`](crate::OpenSslPbkdf2Builder::derive_from_header).
pub fn derive_for_decryption<R: Read>(
    password: &PasswordString,
    key_size: usize,
    iv_size: usize,
    reader: R,
    hasher: Option<Hasher>,
) -> Result<DerivationResult, OpenSslKdfError> {
    let salt = read_salted_header(reader)?;
    derive(
        password.expose_secret().as_bytes(),
        key_size,
        iv_size,
        Some(&salt.expose_secret()[..]),
        hasher,
    )
}
