//! tests/common.rs
//! Common constants and collaborator doubles shared across test files
#![allow(dead_code)] // each test crate uses a different subset

use openssl_pbkdf2_rs::{Hasher, OpenSslKdfError, Pbkdf2, Pbkdf2Primitive, SaltSource, SecretWords};
use std::cell::Cell;

/// Fast iteration count for tests - the default count is covered once in vector_tests.rs
pub const TEST_ITERATIONS: u32 = 1;

pub const TEST_PASSWORD: &str = "correcthorse";

pub const TEST_SALT: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

/// Key/IV word-count pairs exercised by the property tests
pub const TEST_SIZES: &[(usize, usize)] = &[
    (0, 0),
    (0, 4),
    (8, 0),
    (4, 4),
    (8, 4),
    (6, 4),
    (5, 3),
    (16, 8),
];

pub fn fast_pbkdf2() -> Pbkdf2 {
    Pbkdf2::new(TEST_ITERATIONS, Hasher::Sha256)
}

/// Always fails, like an OS without a usable entropy device.
pub struct DeadSource;

impl SaltSource for DeadSource {
    fn fill_random(&mut self, _dest: &mut [u8]) -> Result<(), OpenSslKdfError> {
        Err(OpenSslKdfError::EntropySourceUnavailable("device gone".into()))
    }
}

/// Fills with a constant byte and counts calls.
pub struct ConstSource {
    pub byte: u8,
    pub calls: usize,
}

impl ConstSource {
    pub fn new(byte: u8) -> Self {
        Self { byte, calls: 0 }
    }
}

impl SaltSource for ConstSource {
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<(), OpenSslKdfError> {
        self.calls += 1;
        dest.fill(self.byte);
        Ok(())
    }
}

/// Wraps a real primitive, recording calls and the last requested word count.
pub struct RecordingPrimitive {
    pub inner: Pbkdf2,
    pub calls: Cell<usize>,
    pub last_words: Cell<Option<usize>>,
    pub last_hasher: Cell<Option<Hasher>>,
}

impl RecordingPrimitive {
    pub fn new(inner: Pbkdf2) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
            last_words: Cell::new(None),
            last_hasher: Cell::new(None),
        }
    }
}

impl Pbkdf2Primitive for RecordingPrimitive {
    fn compute(
        &self,
        password: &[u8],
        salt: &[u8],
        key_size_words: usize,
        hasher: Option<Hasher>,
    ) -> Result<SecretWords, OpenSslKdfError> {
        self.calls.set(self.calls.get() + 1);
        self.last_words.set(Some(key_size_words));
        self.last_hasher.set(hasher);
        self.inner.compute(password, salt, key_size_words, hasher)
    }
}

/// Returns `extra_bytes` more (or fewer, if negative) bytes than requested.
pub struct MisbehavingPrimitive {
    pub extra_bytes: isize,
}

impl Pbkdf2Primitive for MisbehavingPrimitive {
    fn compute(
        &self,
        _password: &[u8],
        _salt: &[u8],
        key_size_words: usize,
        _hasher: Option<Hasher>,
    ) -> Result<SecretWords, OpenSslKdfError> {
        let len = (key_size_words * 4).saturating_add_signed(self.extra_bytes);
        Ok(SecretWords::new(vec![0xEE; len]))
    }
}
