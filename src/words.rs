//! src/words.rs
//! Word-sized secret buffers with a significant-length view.
//!
//! A [`SecretWords`] owns a zeroizing backing buffer and a separate count of
//! significant bytes. Lowering the significant length never reallocates or
//! shrinks the backing store: the trailing bytes stay in place (and are wiped
//! on drop) but are no longer exposed.

use std::fmt;
use std::ops::Range;

use crate::aliases::SecretBuffer;
use crate::error::OpenSslKdfError;
use crate::utils::words_to_bytes;

/// Secret byte buffer sized in 4-byte words.
pub struct SecretWords {
    buf: SecretBuffer,
    sig_bytes: usize,
}

impl SecretWords {
    /// Wrap `bytes`; every byte is significant.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        let sig_bytes = bytes.len();
        Self {
            buf: SecretBuffer::new(bytes),
            sig_bytes,
        }
    }

    /// Zero-filled buffer of `words` words.
    ///
    /// Allocation failure is reported as [`OpenSslKdfError::InvalidSize`].
    pub fn zeroed(words: usize) -> Result<Self, OpenSslKdfError> {
        let len = words_to_bytes(words)?;
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(len).map_err(|e| {
            OpenSslKdfError::InvalidSize(format!("cannot allocate {len} bytes: {e}"))
        })?;
        bytes.resize(len, 0);
        Ok(Self::new(bytes))
    }

    /// The significant bytes.
    #[inline]
    #[must_use]
    pub fn expose_secret(&self) -> &[u8] {
        &self.buf.expose_secret()[..self.sig_bytes]
    }

    #[inline]
    pub(crate) fn expose_secret_mut(&mut self) -> &mut [u8] {
        let sig_bytes = self.sig_bytes;
        &mut self.buf.expose_secret_mut()[..sig_bytes]
    }

    /// Number of significant bytes.
    #[inline]
    #[must_use]
    pub fn sig_bytes(&self) -> usize {
        self.sig_bytes
    }

    /// Alias of [`sig_bytes`](Self::sig_bytes).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sig_bytes
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sig_bytes == 0
    }

    /// Length of the backing buffer, which may exceed [`sig_bytes`](Self::sig_bytes).
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.expose_secret().len()
    }

    /// Significant length rounded up to whole words.
    #[inline]
    #[must_use]
    pub fn words(&self) -> usize {
        self.sig_bytes.div_ceil(crate::consts::WORD_SIZE)
    }

    /// Lower the significant length without touching the backing buffer.
    pub(crate) fn clamp(&mut self, sig_bytes: usize) -> Result<(), OpenSslKdfError> {
        if sig_bytes > self.sig_bytes {
            return Err(OpenSslKdfError::LengthMismatch {
                expected: sig_bytes,
                actual: self.sig_bytes,
            });
        }
        self.sig_bytes = sig_bytes;
        Ok(())
    }

    /// Copy a range of the significant bytes into a fresh buffer.
    pub(crate) fn copy_range(&self, range: Range<usize>) -> Result<Self, OpenSslKdfError> {
        let end = range.end;
        self.expose_secret()
            .get(range)
            .map(|bytes| Self::new(bytes.to_vec()))
            .ok_or(OpenSslKdfError::LengthMismatch {
                expected: end,
                actual: self.sig_bytes,
            })
    }
}

impl fmt::Debug for SecretWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretWords")
            .field("sig_bytes", &self.sig_bytes)
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}
