//! src/crypto/kdf/pbkdf2.rs
//! PBKDF2-HMAC primitive with a pass-through hash selector

use std::fmt;
use std::str::FromStr;

use crate::aliases::{HmacSha1, HmacSha256, HmacSha512};
use crate::consts::{DEFAULT_PBKDF2_ITERATIONS, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::error::OpenSslKdfError;
use crate::utils::words_to_bytes;
use crate::words::SecretWords;

use pbkdf2::pbkdf2;

/// Hash function used as the HMAC PRF inside PBKDF2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hasher {
    /// Legacy choice of older CryptoJS/OpenSSL tooling.
    Sha1,
    #[default]
    Sha256,
    Sha512,
}

impl Hasher {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Digest size in bytes (one PBKDF2 block).
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    /// Longest output PBKDF2 allows for this PRF: `(2^32 - 1) * output_len` bytes.
    pub const fn max_output_len(self) -> usize {
        (u32::MAX as usize).saturating_mul(self.output_len())
    }

    pub const fn all() -> [Self; 3] {
        [Self::Sha1, Self::Sha256, Self::Sha512]
    }
}

impl fmt::Display for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Hasher {
    type Err = OpenSslKdfError;

    /// Accepts `sha1`, `sha256`, `sha512`, case-insensitive, with or without a dash.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            _ => Err(OpenSslKdfError::Pbkdf2(format!("unsupported hash: {s}"))),
        }
    }
}

/// The PBKDF2 collaborator consumed by [`derive_with`](crate::derive_with).
///
/// Implementations must be deterministic for identical inputs and their own
/// iteration configuration, and must return exactly `key_size_words * 4`
/// bytes. `hasher == None` selects the implementation's default hash.
pub trait Pbkdf2Primitive {
    fn compute(
        &self,
        password: &[u8],
        salt: &[u8],
        key_size_words: usize,
        hasher: Option<Hasher>,
    ) -> Result<SecretWords, OpenSslKdfError>;
}

impl<P: Pbkdf2Primitive + ?Sized> Pbkdf2Primitive for &P {
    fn compute(
        &self,
        password: &[u8],
        salt: &[u8],
        key_size_words: usize,
        hasher: Option<Hasher>,
    ) -> Result<SecretWords, OpenSslKdfError> {
        (**self).compute(password, salt, key_size_words, hasher)
    }
}

/// PBKDF2 backed by the RustCrypto `pbkdf2` crate.
///
/// Defaults: [`DEFAULT_PBKDF2_ITERATIONS`] rounds of HMAC-SHA256.
///
/// # Thread Safety
///
/// `Copy`, holds no state beyond its configuration; safe to share across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf2 {
    iterations: u32,
    default_hasher: Hasher,
}

impl Pbkdf2 {
    /// Iterations are validated on [`compute`](Pbkdf2Primitive::compute), not here.
    #[must_use]
    pub const fn new(iterations: u32, default_hasher: Hasher) -> Self {
        Self {
            iterations,
            default_hasher,
        }
    }

    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Hash used when the caller passes `None`.
    #[must_use]
    pub const fn default_hasher(&self) -> Hasher {
        self.default_hasher
    }
}

impl Default for Pbkdf2 {
    fn default() -> Self {
        Self::new(DEFAULT_PBKDF2_ITERATIONS, Hasher::default())
    }
}

impl Pbkdf2Primitive for Pbkdf2 {
    fn compute(
        &self,
        password: &[u8],
        salt: &[u8],
        key_size_words: usize,
        hasher: Option<Hasher>,
    ) -> Result<SecretWords, OpenSslKdfError> {
        let hasher = hasher.unwrap_or(self.default_hasher);
        let len = words_to_bytes(key_size_words)?;
        if len > hasher.max_output_len() {
            return Err(OpenSslKdfError::InvalidSize(format!(
                "{len} bytes exceeds the PBKDF2-HMAC-{hasher} output limit"
            )));
        }

        let mut out = SecretWords::zeroed(key_size_words)?;
        derive_pbkdf2_into(password, salt, self.iterations, hasher, out.expose_secret_mut())?;
        Ok(out)
    }
}

/// Fill `out` with PBKDF2-HMAC-`hasher` output.
#[inline]
pub fn derive_pbkdf2_into(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    hasher: Hasher,
    out: &mut [u8],
) -> Result<(), OpenSslKdfError> {
    if !(PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&iterations) {
        return Err(OpenSslKdfError::Pbkdf2(format!(
            "iterations must be in {PBKDF2_MIN_ITER}..={PBKDF2_MAX_ITER}, got {iterations}"
        )));
    }

    let result = match hasher {
        Hasher::Sha1 => pbkdf2::<HmacSha1>(password, salt, iterations, out),
        Hasher::Sha256 => pbkdf2::<HmacSha256>(password, salt, iterations, out),
        Hasher::Sha512 => pbkdf2::<HmacSha512>(password, salt, iterations, out),
    };
    result.map_err(|e| OpenSslKdfError::Pbkdf2(format!("PBKDF2 failed: {e}")))
}
