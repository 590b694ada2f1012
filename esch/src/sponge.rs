//======================================================================
// src/sponge.rs
// The Esch sponge: indirect message injection, domain markers and the
// squeeze phase, generic over the permutation width.
//======================================================================

use sparkle::{big, codec, ell, slim, SparkleVariant};

use crate::variant::EschVariant;

/// Absorption rate in bytes, shared by both instances.
const RATE: usize = 16;
const RATE_WORDS: usize = RATE / 4;

/// Marker mixed into the outer state for a final block shorter than the
/// rate (the padded path; an empty message also lands here).
const MARKER_PADDED: u32 = 1 << 24;
/// Marker mixed into the outer state for a final block of exactly one rate.
const MARKER_FULL: u32 = 2 << 24;

/// Feistel message injection: the block is not XORed into the state
/// directly but first spread through the `ℓ` mixer, touching the whole
/// outer half of the state.
fn inject<P: SparkleVariant>(state: &mut [u32], block: &[u32; RATE_WORDS]) {
    let tx = ell(block[0] ^ block[2]);
    let ty = ell(block[1] ^ block[3]);

    for pair in state[..P::BRANCHES].chunks_exact_mut(2) {
        pair[0] ^= ty;
        pair[1] ^= tx;
    }
    for (word, msg) in state.iter_mut().zip(block) {
        *word ^= msg;
    }
}

/// One-shot hash of `msg` into `digest` (`V::DIGEST_SIZE` bytes).
pub(crate) fn hash<V: EschVariant>(msg: &[u8], digest: &mut [u8]) {
    debug_assert_eq!(digest.len(), V::DIGEST_SIZE);

    let mut state = [0u32; 16];
    let state = &mut state[..V::Permutation::STATE_WORDS];
    let mut block = [0u32; RATE_WORDS];

    // Every block except the final one, even when the final one is full.
    let mut remaining = msg.len();
    while remaining > RATE {
        let offset = msg.len() - remaining;
        codec::bytes_to_words(&msg[offset..offset + RATE], &mut block);
        inject::<V::Permutation>(state, &block);
        slim::<V::Permutation>(state);
        remaining -= RATE;
    }

    // Final block: zero-filled, 0x80-padded when short of the rate.
    let tail = &msg[msg.len() - remaining..];
    let full_words = remaining / 4;
    block = [0u32; RATE_WORDS];
    codec::bytes_to_words(&tail[..full_words * 4], &mut block[..full_words]);
    if full_words < RATE_WORDS {
        block[full_words] = codec::padded_word(&tail[full_words * 4..]);
    }

    let marker = if remaining < RATE { MARKER_PADDED } else { MARKER_FULL };
    state[V::Permutation::BRANCHES - 1] ^= marker;

    inject::<V::Permutation>(state, &block);
    big::<V::Permutation>(state);

    // Squeeze one rate at a time, slim permutation in between.
    for (i, chunk) in digest.chunks_exact_mut(RATE).enumerate() {
        if i > 0 {
            slim::<V::Permutation>(state);
        }
        codec::words_to_bytes(&state[..RATE_WORDS], chunk);
    }
}
