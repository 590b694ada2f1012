//======================================================================
// src/duplex.rs
// The Schwaemm duplex: state initialization, the ρ/ρ′ feedback
// functions, rate whitening, block processing for both directions and
// tag finalization, generic over the variant parameters.
//======================================================================

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use sparkle::{big, codec, slim, SparkleVariant};

use crate::variant::SchwaemmVariant;

/// Widest state (Schwaemm256-256) in 32-bit words.
const MAX_STATE_WORDS: usize = 16;
/// Widest rate/capacity in 32-bit words.
const MAX_RATE_WORDS: usize = 8;

fn xor_words(s: &mut [u32], d: &[u32]) {
    for (s, d) in s.iter_mut().zip(d) {
        *s ^= d;
    }
}

/// `(s1 ‖ s2) ↦ (s2 ‖ s1 ⊕ s2)` on the outer state.
fn feistel_swap(s: &mut [u32]) {
    let half = s.len() / 2;
    for i in 0..half {
        s.swap(i, half + i);
    }
    let (low, high) = s.split_at_mut(half);
    for (hi, lo) in high.iter_mut().zip(low) {
        *hi ^= *lo;
    }
}

/// Feedback function absorbing a block into the outer state.
fn rho1(s: &mut [u32], d: &[u32]) {
    feistel_swap(s);
    xor_words(s, d);
}

/// Feedback function combining a block with the outer state for output.
fn rho2(s: &mut [u32], d: &[u32]) {
    xor_words(s, d);
}

/// Decryption-side counterpart of [`rho1`].
fn rho_prime1(s: &mut [u32], d: &[u32]) {
    let mut before = [0u32; MAX_RATE_WORDS];
    before[..s.len()].copy_from_slice(s);
    feistel_swap(s);
    for (i, word) in s.iter_mut().enumerate() {
        *word ^= before[i] ^ d[i];
    }
}

/// Decryption-side counterpart of [`rho2`]; XOR is its own inverse.
fn rho_prime2(s: &mut [u32], d: &[u32]) {
    rho2(s, d);
}

/// Rate whitening, applied before every permutation call except the one
/// inside [`initialize`]: XOR the capacity words into the rate, repeating
/// them when the capacity is narrower than the rate.
fn whiten<V: SchwaemmVariant>(state: &mut [u32]) {
    let rate_words = V::RATE / 4;
    let capacity_words = V::CAPACITY / 4;
    for i in 0..rate_words {
        let cap = state[rate_words + i % capacity_words];
        state[i] ^= cap;
    }
}

/// Load nonce and key into the state and run the big permutation.
fn initialize<V: SchwaemmVariant>(state: &mut [u32], key: &[u8], nonce: &[u8]) {
    let rate_words = V::RATE / 4;
    codec::bytes_to_words(nonce, &mut state[..rate_words]);
    codec::bytes_to_words(key, &mut state[rate_words..]);
    big::<V::Permutation>(state);
}

/// Absorb non-empty associated data.
fn absorb_associated_data<V: SchwaemmVariant>(state: &mut [u32], data: &[u8]) {
    let rate_words = V::RATE / 4;
    let mut block = [0u32; MAX_RATE_WORDS];
    let block = &mut block[..rate_words];

    let mut remaining = data.len();
    while remaining > V::RATE {
        let offset = data.len() - remaining;
        codec::bytes_to_words(&data[offset..offset + V::RATE], block);
        rho1(&mut state[..rate_words], block);
        whiten::<V>(state);
        slim::<V::Permutation>(state);
        remaining -= V::RATE;
    }

    let tail = &data[data.len() - remaining..];
    let full_words = remaining / 4;
    block.fill(0);
    codec::bytes_to_words(&tail[..full_words * 4], &mut block[..full_words]);
    if full_words < rate_words {
        block[full_words] = codec::padded_word(&tail[full_words * 4..]);
    }
    rho1(&mut state[..rate_words], block);

    let marker = if remaining < V::RATE { V::AD_PADDED } else { V::AD_FULL };
    let last = state.len() - 1;
    state[last] ^= marker;

    whiten::<V>(state);
    big::<V::Permutation>(state);
}

/// Encrypt a non-empty buffer in place, plaintext in, ciphertext out.
fn encrypt_text<V: SchwaemmVariant>(state: &mut [u32], buffer: &mut [u8]) {
    let rate_words = V::RATE / 4;
    let mut block = [0u32; MAX_RATE_WORDS];
    let block = &mut block[..rate_words];
    let mut output = [0u32; MAX_RATE_WORDS];
    let output = &mut output[..rate_words];

    let mut remaining = buffer.len();
    while remaining > V::RATE {
        let offset = buffer.len() - remaining;
        let chunk = &mut buffer[offset..offset + V::RATE];
        codec::bytes_to_words(chunk, block);

        output.copy_from_slice(&state[..rate_words]);
        rho2(output, block);
        codec::words_to_bytes(output, chunk);

        rho1(&mut state[..rate_words], block);
        whiten::<V>(state);
        slim::<V::Permutation>(state);
        remaining -= V::RATE;
    }

    let tail_start = buffer.len() - remaining;
    let tail = &mut buffer[tail_start..];
    let full_words = remaining / 4;
    block.fill(0);
    codec::bytes_to_words(&tail[..full_words * 4], &mut block[..full_words]);
    if full_words < rate_words {
        block[full_words] = codec::padded_word(&tail[full_words * 4..]);
    }

    output.copy_from_slice(&state[..rate_words]);
    rho2(output, block);
    codec::words_to_bytes(output, tail);

    rho1(&mut state[..rate_words], block);

    let marker = if remaining < V::RATE { V::TEXT_PADDED } else { V::TEXT_FULL };
    let last = state.len() - 1;
    state[last] ^= marker;

    whiten::<V>(state);
    big::<V::Permutation>(state);
}

/// Decrypt a non-empty buffer in place, ciphertext in, plaintext out.
fn decrypt_text<V: SchwaemmVariant>(state: &mut [u32], buffer: &mut [u8]) {
    let rate_words = V::RATE / 4;
    let mut block = [0u32; MAX_RATE_WORDS];
    let block = &mut block[..rate_words];
    let mut output = [0u32; MAX_RATE_WORDS];
    let output = &mut output[..rate_words];

    let mut remaining = buffer.len();
    while remaining > V::RATE {
        let offset = buffer.len() - remaining;
        let chunk = &mut buffer[offset..offset + V::RATE];
        codec::bytes_to_words(chunk, block);

        output.copy_from_slice(&state[..rate_words]);
        rho_prime2(output, block);
        codec::words_to_bytes(output, chunk);

        rho_prime1(&mut state[..rate_words], block);
        whiten::<V>(state);
        slim::<V::Permutation>(state);
        remaining -= V::RATE;
    }

    let tail_start = buffer.len() - remaining;
    let tail = &mut buffer[tail_start..];
    let full_words = remaining / 4;
    block.fill(0);
    codec::bytes_to_words(&tail[..full_words * 4], &mut block[..full_words]);
    if full_words < rate_words {
        block[full_words] = codec::padded_word(&tail[full_words * 4..]);
    }

    output.copy_from_slice(&state[..rate_words]);
    rho_prime2(output, block);
    codec::words_to_bytes(output, tail);

    if remaining < V::RATE {
        // Absorb the block the encryptor absorbed: the plaintext just
        // recovered, padded, fed through the swap-variant feedback.
        block.fill(0);
        codec::bytes_to_words(&tail[..full_words * 4], &mut block[..full_words]);
        block[full_words] = codec::padded_word(&tail[full_words * 4..]);
        rho1(&mut state[..rate_words], block);
    } else {
        rho_prime1(&mut state[..rate_words], block);
    }

    let marker = if remaining < V::RATE { V::TEXT_PADDED } else { V::TEXT_FULL };
    let last = state.len() - 1;
    state[last] ^= marker;

    whiten::<V>(state);
    big::<V::Permutation>(state);
}

/// Produce the tag: the capacity half XORed with the key.
fn finalize<V: SchwaemmVariant>(state: &[u32], key: &[u8], tag: &mut [u8]) {
    let rate_words = V::RATE / 4;
    let capacity_words = V::CAPACITY / 4;
    let mut words = [0u32; MAX_RATE_WORDS];
    let words = &mut words[..capacity_words];

    codec::bytes_to_words(key, words);
    for (word, cap) in words.iter_mut().zip(&state[rate_words..]) {
        *word ^= cap;
    }
    codec::words_to_bytes(words, tag);
}

/// One-shot encryption over `buffer` (plaintext in, ciphertext out), with
/// the tag written to `tag`.
pub(crate) fn encrypt_in_place<V: SchwaemmVariant>(
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    buffer: &mut [u8],
    tag: &mut [u8],
) {
    debug_assert_eq!(key.len(), V::CAPACITY);
    debug_assert_eq!(nonce.len(), V::RATE);
    debug_assert_eq!(tag.len(), V::CAPACITY);

    let mut state = [0u32; MAX_STATE_WORDS];
    {
        let state = &mut state[..V::Permutation::STATE_WORDS];
        initialize::<V>(state, key, nonce);
        if !associated_data.is_empty() {
            absorb_associated_data::<V>(state, associated_data);
        }
        if !buffer.is_empty() {
            encrypt_text::<V>(state, buffer);
        }
        finalize::<V>(state, key, tag);
    }
    state.zeroize();
}

/// One-shot verified decryption over `buffer` (ciphertext in, plaintext
/// out). On tag mismatch the buffer is zeroized and an error returned.
pub(crate) fn decrypt_in_place<V: SchwaemmVariant>(
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    buffer: &mut [u8],
    tag: &[u8],
) -> aead::Result<()> {
    debug_assert_eq!(key.len(), V::CAPACITY);
    debug_assert_eq!(nonce.len(), V::RATE);
    debug_assert_eq!(tag.len(), V::CAPACITY);

    let mut state = [0u32; MAX_STATE_WORDS];
    let mut computed = [0u8; 32];
    let computed = &mut computed[..V::CAPACITY];
    {
        let state = &mut state[..V::Permutation::STATE_WORDS];
        initialize::<V>(state, key, nonce);
        if !associated_data.is_empty() {
            absorb_associated_data::<V>(state, associated_data);
        }
        if !buffer.is_empty() {
            decrypt_text::<V>(state, buffer);
        }
        finalize::<V>(state, key, computed);
    }
    state.zeroize();

    if computed.ct_eq(tag).into() {
        Ok(())
    } else {
        // Never release unverified plaintext.
        buffer.zeroize();
        Err(aead::Error)
    }
}
