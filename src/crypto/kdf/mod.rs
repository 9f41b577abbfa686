//! # Key Derivation Functions (KDF)
//!
//! - [`pbkdf2`] - PBKDF2-HMAC with a selectable hash (SHA-1, SHA-256, SHA-512)
//!
//! For most use cases, call [`derive`](crate::derive) or the
//! [`OpenSslPbkdf2Builder`](crate::OpenSslPbkdf2Builder), which resolve the
//! salt and split the output into key and IV.

pub mod pbkdf2;
