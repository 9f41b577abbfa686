//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, OpenSslKdfError>`](OpenSslKdfError).

use thiserror::Error;

/// The error type for all key/IV derivation operations.
///
/// No operation ever returns a partially populated result alongside an
/// error, and nothing in this crate retries.
#[derive(Error, Debug)]
pub enum OpenSslKdfError {
    /// A salt had to be generated but the secure random source failed.
    ///
    /// There is no fallback to a weaker source.
    #[error("entropy source unavailable: {0}")]
    EntropySourceUnavailable(String),

    /// The PBKDF2 primitive rejected its input.
    ///
    /// Covers invalid iteration counts, unsupported hash names and output
    /// length errors reported by the `pbkdf2` crate. The message is passed
    /// through as the primitive produced it.
    #[error("PBKDF2 error: {0}")]
    Pbkdf2(String),

    /// The derived buffer does not match the requested key + IV length.
    ///
    /// This indicates a defect in the primitive integration rather than a
    /// recoverable runtime condition.
    #[error("derived key material length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// `(key_size + iv_size) * 4`
        expected: usize,
        /// Length the primitive actually produced.
        actual: usize,
    },

    /// Word counts too large to express as a byte length.
    #[error("invalid size: {0}")]
    InvalidSize(String),

    /// `Salted__` header missing, truncated or malformed.
    #[error("Header error: {0}")]
    Header(String),

    /// I/O error while reading or writing a container header.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<&'static str> for OpenSslKdfError {
    fn from(msg: &'static str) -> Self {
        OpenSslKdfError::Pbkdf2(msg.to_string())
    }
}
