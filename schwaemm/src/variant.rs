//======================================================================
// src/variant.rs
// Security parameter variants for the Schwaemm AEAD family.
//======================================================================

use aead::consts::{U16, U24, U32};
use aead::generic_array::ArrayLength;
use sparkle::{Sparkle256, Sparkle384, Sparkle512, SparkleVariant};

/// Compile-time parameters of one Schwaemm instance.
///
/// The rate sets the nonce size and the block width of text processing;
/// the capacity sets the key and tag sizes. The four domain constants are
/// mixed into the last state word when the final block of the associated
/// data respectively the text is absorbed, and distinguish a padded final
/// block from one that filled the whole rate.
pub trait SchwaemmVariant {
    /// The Sparkle permutation driving the duplex;
    /// its state is `RATE + CAPACITY` bytes wide.
    type Permutation: SparkleVariant;
    /// Key length in bytes (equals the capacity).
    type KeySize: ArrayLength<u8>;
    /// Nonce length in bytes (equals the rate).
    type NonceSize: ArrayLength<u8>;
    /// Tag length in bytes (equals the capacity).
    type TagSize: ArrayLength<u8>;

    /// Rate in bytes.
    const RATE: usize;
    /// Capacity in bytes.
    const CAPACITY: usize;

    /// Final associated-data block needed padding.
    const AD_PADDED: u32;
    /// Final associated-data block filled the rate exactly.
    const AD_FULL: u32;
    /// Final text block needed padding.
    const TEXT_PADDED: u32;
    /// Final text block filled the rate exactly.
    const TEXT_FULL: u32;
}

/// Schwaemm128-128: 128-bit rate, 128-bit capacity, Sparkle256.
#[derive(Clone)]
pub struct Schwaemm128_128;
impl SchwaemmVariant for Schwaemm128_128 {
    type Permutation = Sparkle256;
    type KeySize = U16;
    type NonceSize = U16;
    type TagSize = U16;

    const RATE: usize = 16;
    const CAPACITY: usize = 16;

    const AD_PADDED: u32 = (0 ^ (1 << 2)) << 24;
    const AD_FULL: u32 = (1 ^ (1 << 2)) << 24;
    const TEXT_PADDED: u32 = (2 ^ (1 << 2)) << 24;
    const TEXT_FULL: u32 = (3 ^ (1 << 2)) << 24;
}

/// Schwaemm192-192: 192-bit rate, 192-bit capacity, Sparkle384.
#[derive(Clone)]
pub struct Schwaemm192_192;
impl SchwaemmVariant for Schwaemm192_192 {
    type Permutation = Sparkle384;
    type KeySize = U24;
    type NonceSize = U24;
    type TagSize = U24;

    const RATE: usize = 24;
    const CAPACITY: usize = 24;

    const AD_PADDED: u32 = (0 ^ (1 << 3)) << 24;
    const AD_FULL: u32 = (1 ^ (1 << 3)) << 24;
    const TEXT_PADDED: u32 = (2 ^ (1 << 3)) << 24;
    const TEXT_FULL: u32 = (3 ^ (1 << 3)) << 24;
}

/// Schwaemm256-128, the primary member of the family: 256-bit rate,
/// 128-bit capacity, Sparkle384.
#[derive(Clone)]
pub struct Schwaemm256_128;
impl SchwaemmVariant for Schwaemm256_128 {
    type Permutation = Sparkle384;
    type KeySize = U16;
    type NonceSize = U32;
    type TagSize = U16;

    const RATE: usize = 32;
    const CAPACITY: usize = 16;

    const AD_PADDED: u32 = (0 ^ (1 << 2)) << 24;
    const AD_FULL: u32 = (1 ^ (1 << 2)) << 24;
    const TEXT_PADDED: u32 = (2 ^ (1 << 2)) << 24;
    const TEXT_FULL: u32 = (3 ^ (1 << 2)) << 24;
}

/// Schwaemm256-256: 256-bit rate, 256-bit capacity, Sparkle512.
#[derive(Clone)]
pub struct Schwaemm256_256;
impl SchwaemmVariant for Schwaemm256_256 {
    type Permutation = Sparkle512;
    type KeySize = U32;
    type NonceSize = U32;
    type TagSize = U32;

    const RATE: usize = 32;
    const CAPACITY: usize = 32;

    const AD_PADDED: u32 = (0 ^ (1 << 4)) << 24;
    const AD_FULL: u32 = (1 ^ (1 << 4)) << 24;
    const TEXT_PADDED: u32 = (2 ^ (1 << 4)) << 24;
    const TEXT_FULL: u32 = (3 ^ (1 << 4)) << 24;
}
