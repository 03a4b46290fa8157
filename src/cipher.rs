//! Key schedule and line cipher.
//!
//! Obfuscation is a rolling 16-bit XOR stream. Two distinct step functions
//! are used, deliberately:
//!
//! * **Across lines** the key advances additively
//!   (`BASE_KEY + i * ADVANCE mod 2^16`), which makes any line decodable in
//!   isolation given only its index - no dependency on having decoded the
//!   lines before it.
//! * **Within a line** the key advances by a left rotation
//!   (`(k << 3 | k >> 13) & 0xFFFF`), which keeps XOR-with-key perfectly
//!   self-inverse: re-running [`line_cipher`] with the same starting key
//!   undoes itself exactly.
//!
//! A prior Python implementation of this format used the rotation step for
//! its bulk line accessor and the additive step only for single-line
//! lookups by index, which silently produced different plaintext depending
//! on which accessor was used. This module exposes only the additive
//! cross-line step; there is no bulk accessor to get this wrong.

use crate::{Error, Result};

/// Initial key for line 0.
pub const BASE_KEY: u16 = 0x7C89;

/// Per-line additive key step.
pub const ADVANCE: u16 = 0x2983;

/// Compute the initial key for the `index`-th line of a container.
///
/// Wrapping addition mirrors the on-disk key schedule: line indices beyond
/// `u16::MAX / ADVANCE` wrap around exactly as the original 16-bit
/// arithmetic does.
#[inline]
#[must_use]
pub fn line_key(index: usize) -> u16 {
    let step = (index as u32).wrapping_mul(u32::from(ADVANCE)) as u16;
    BASE_KEY.wrapping_add(step)
}

/// Rotate a 16-bit key left by 3 bits, the within-line key advance.
#[inline]
#[must_use]
pub fn rotate_key(key: u16) -> u16 {
    key.rotate_left(3)
}

/// XOR-obfuscate (or de-obfuscate - the operation is its own inverse) `data`
/// in place, starting from `key` and advancing it by [`rotate_key`] after
/// each 16-bit word.
///
/// `data` must have even length; an odd-length buffer is reported as
/// [`Error::MalformedCiphertext`] rather than silently truncated.
pub fn line_cipher(data: &mut [u8], mut key: u16) -> Result<()> {
    if data.len() % 2 != 0 {
        return Err(Error::MalformedCiphertext);
    }
    for word in data.chunks_exact_mut(2) {
        let unit = u16::from_le_bytes([word[0], word[1]]) ^ key;
        word.copy_from_slice(&unit.to_le_bytes());
        key = rotate_key(key);
    }
    Ok(())
}
