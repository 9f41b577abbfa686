// src/crypto/mod.rs

//! External cryptographic collaborators.
//!
//! [`kdf`] wraps the PBKDF2 primitive, [`rng`] the secure random source used
//! for salt generation. Both are traits so derivation can be exercised with
//! substitutes; HMAC types live in `aliases.rs`.

pub mod kdf;
pub mod rng;
