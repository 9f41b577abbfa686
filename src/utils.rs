//! Word/byte arithmetic shared by the stretcher and the packager.

use crate::consts::WORD_SIZE;
use crate::error::OpenSslKdfError;

/// Converts a word count into a byte length.
///
/// Returns [`OpenSslKdfError::InvalidSize`] if the product overflows `usize`
/// or exceeds `isize::MAX`, the largest allocation Rust can make.
#[inline]
pub fn words_to_bytes(words: usize) -> Result<usize, OpenSslKdfError> {
    words
        .checked_mul(WORD_SIZE)
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or_else(|| OpenSslKdfError::InvalidSize(format!("{words} words is too large")))
}

/// Total words of a key + IV request.
#[inline]
pub fn total_words(key_size: usize, iv_size: usize) -> Result<usize, OpenSslKdfError> {
    key_size.checked_add(iv_size).ok_or_else(|| {
        OpenSslKdfError::InvalidSize(format!("key size {key_size} + iv size {iv_size} overflows"))
    })
}
