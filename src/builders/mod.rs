//! # Builders
//!
//! - [`openssl_pbkdf2_builder`] - Builder for OpenSSL-style key + IV derivation
//!
//! Builders make every derivation parameter explicit (hash, iteration count,
//! salt) instead of relying on defaults hidden behind [`derive`](crate::derive).

pub mod openssl_pbkdf2_builder;
