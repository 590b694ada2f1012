//! Little-endian conversions between byte buffers and 32-bit word arrays.
//!
//! All state I/O in the suite is little-endian regardless of the host;
//! `u32::{from_le_bytes, to_le_bytes}` is the single conversion path, so no
//! endianness branch exists anywhere.

/// Load `bytes` into `words`, little-endian, four bytes per word.
///
/// `bytes` may stop short of a word boundary; the trailing partial word is
/// filled from its low end with the remaining bytes and zero above them.
/// Words past the loaded region are left untouched.
pub fn bytes_to_words(bytes: &[u8], words: &mut [u32]) {
    debug_assert!(bytes.len() <= words.len() * 4);

    let mut chunks = bytes.chunks_exact(4);
    for (word, chunk) in words.iter_mut().zip(chunks.by_ref()) {
        *word = u32::from_le_bytes(chunk.try_into().unwrap());
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        let mut padded = [0u8; 4];
        padded[..tail.len()].copy_from_slice(tail);
        words[bytes.len() / 4] = u32::from_le_bytes(padded);
    }
}

/// Store words into `bytes`, little-endian; the inverse of
/// [`bytes_to_words`].
///
/// `bytes` may stop short of a word boundary, in which case only the low
/// bytes of the final word are written. Words past `bytes.len() / 4` are
/// ignored, so a long scratch buffer can feed a short output.
pub fn words_to_bytes(words: &[u32], bytes: &mut [u8]) {
    debug_assert!(bytes.len() <= words.len() * 4);

    let full = bytes.len() / 4;
    let mut chunks = bytes.chunks_exact_mut(4);
    for (chunk, word) in chunks.by_ref().zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }

    let tail = chunks.into_remainder();
    if !tail.is_empty() {
        let le = words[full].to_le_bytes();
        tail.copy_from_slice(&le[..tail.len()]);
    }
}

/// Build the word carrying the `0x80` end-of-input marker.
///
/// `tail` holds the last `len < 4` input bytes; they land in the low bytes
/// of the word and the marker sits immediately above them.
pub fn padded_word(tail: &[u8]) -> u32 {
    debug_assert!(tail.len() < 4);

    let mut word = 0x80u32 << (tail.len() * 8);
    for (i, byte) in tail.iter().enumerate() {
        word |= u32::from(*byte) << (i * 8);
    }
    word
}
