//! # Constants
//!
//! Sizes of the legacy OpenSSL container layout and the PBKDF2 iteration
//! bounds used by the default primitive.

/// Size of one word in bytes. Key and IV sizes are expressed in words.
pub const WORD_SIZE: usize = 4;

/// Length of a generated salt (64 bits).
///
/// Caller-provided salts may have any non-zero length; only the `Salted__`
/// header enforces this size.
pub const SALT_LEN: usize = 8;

/// Magic prefix of a salted OpenSSL `enc` payload.
pub const OPENSSL_SALTED_MAGIC: [u8; 8] = *b"Salted__";

/// Magic + salt.
pub const SALTED_HEADER_LEN: usize = OPENSSL_SALTED_MAGIC.len() + SALT_LEN;

/// Key size in words for AES-256.
pub const AES256_KEY_WORDS: usize = 8;

/// IV size in words for AES-CBC (one 16-byte block).
pub const AES_IV_WORDS: usize = 4;

/// Minimum allowed PBKDF2 iteration count.
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Maximum allowed PBKDF2 iteration count.
///
/// Set to `5_000_000` to prevent runaway computation times.
pub const PBKDF2_MAX_ITER: u32 = 5_000_000;

/// Default PBKDF2 iteration count of [`Pbkdf2::default`](crate::Pbkdf2).
///
/// Matches the 250,000 rounds current CryptoJS-compatible tooling applies
/// when no iteration count is configured.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 250_000;
