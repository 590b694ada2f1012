#![no_std]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point: one-shot hashing over the two Esch variants.
//======================================================================

mod sponge;
mod variant;


pub use variant::{Esch256, Esch384, EschVariant};

/// Esch256 digest size in bytes.
pub const ESCH256_DIGEST_SIZE: usize = 32;

/// Esch384 digest size in bytes.
pub const ESCH384_DIGEST_SIZE: usize = 48;

/// Hash `msg` with Esch256, returning the 32-byte digest.
pub fn esch256_hash(msg: &[u8]) -> [u8; ESCH256_DIGEST_SIZE] {
    let mut digest = [0u8; ESCH256_DIGEST_SIZE];
    sponge::hash::<Esch256>(msg, &mut digest);
    digest
}

/// Hash `msg` with Esch256 into a caller-provided digest buffer.
pub fn esch256_hash_into(msg: &[u8], digest: &mut [u8; ESCH256_DIGEST_SIZE]) {
    sponge::hash::<Esch256>(msg, digest);
}

/// Hash `msg` with Esch384, returning the 48-byte digest.
pub fn esch384_hash(msg: &[u8]) -> [u8; ESCH384_DIGEST_SIZE] {
    let mut digest = [0u8; ESCH384_DIGEST_SIZE];
    sponge::hash::<Esch384>(msg, &mut digest);
    digest
}

/// Hash `msg` with Esch384 into a caller-provided digest buffer.
pub fn esch384_hash_into(msg: &[u8], digest: &mut [u8; ESCH384_DIGEST_SIZE]) {
    sponge::hash::<Esch384>(msg, digest);
}
