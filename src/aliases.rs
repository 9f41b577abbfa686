//! # Secure-Gate Type Aliases
//!
//! Type aliases for secure memory management using
//! [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! Secret types zeroize on drop (with the `zeroize` feature) and require an
//! explicit `.expose_secret()` to read.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha1`], [`HmacSha256`], [`HmacSha512`] - PRFs fed to PBKDF2
//!
//! ### Dynamic Secrets
//! - [`PasswordString`] - Secure password string wrapper
//! - [`SecretBuffer`] - Backing store of derived key material
//!
//! ### Fixed-Size Values
//! - [`Salt8`] - 8-byte salt as stored in a `Salted__` header

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

use hmac::Hmac;
use sha1::Sha1;
use sha2::{Sha256, Sha512};

pub type HmacSha1 = Hmac<Sha1>;
pub type HmacSha256 = Hmac<Sha256>;
pub type HmacSha512 = Hmac<Sha512>;

dynamic_alias!(PasswordString, String);
dynamic_alias!(SecretBuffer, Vec<u8>);

fixed_alias!(Salt8, 8); // Salted__ header salt
