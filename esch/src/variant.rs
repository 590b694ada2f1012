//======================================================================
// src/variant.rs
// Security parameter variants for the Esch hash functions.
//======================================================================

use sparkle::{Sparkle384, Sparkle512, SparkleVariant};

/// Parameters of one Esch instance.
///
/// Both instances absorb 16-byte blocks; they differ in the permutation
/// width and the digest size.
pub trait EschVariant {
    /// The Sparkle permutation the sponge runs on.
    type Permutation: SparkleVariant;
    /// Digest size in bytes; always a multiple of the 16-byte rate.
    const DIGEST_SIZE: usize;
}

/// Esch256: 384-bit state, 32-byte digest.
#[derive(Clone)]
pub struct Esch256;
impl EschVariant for Esch256 {
    type Permutation = Sparkle384;
    const DIGEST_SIZE: usize = 32;
}

/// Esch384: 512-bit state, 48-byte digest.
#[derive(Clone)]
pub struct Esch384;
impl EschVariant for Esch384 {
    type Permutation = Sparkle512;
    const DIGEST_SIZE: usize = 48;
}
