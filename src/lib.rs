// src/lib.rs

//! OpenSSL-style PBKDF2 key + IV derivation.
//!
//! One PBKDF2 call stretches a password and an 8-byte salt into
//! `key_size + iv_size` words; the leading words become the key, the rest
//! the IV, and the salt travels alongside for the `Salted__` header.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod derive;
pub mod error;
pub mod header;
pub mod utils;
pub mod words;

// High-level API
pub use derive::{derive, derive_with, DerivationResult};
pub use error::OpenSslKdfError;
pub use words::SecretWords;

pub use builders::openssl_pbkdf2_builder::OpenSslPbkdf2Builder;

// Collaborator seams
pub use crypto::kdf::pbkdf2::{derive_pbkdf2_into, Hasher, Pbkdf2, Pbkdf2Primitive};
pub use crypto::rng::{OsSaltSource, SaltSource};

pub use header::{
    derive_for_decryption, read_salted_header, split_salted_header, write_salted_header,
};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{derive_batch, DeriveRequest};
