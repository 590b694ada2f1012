//! The Sparkle permutation family.
//!
//! Sparkle is an ARX permutation over a state of 32-bit word pairs
//! ("branches"), built from the Alzette 64-bit ARX-box and a Feistel-style
//! linear diffusion layer. Three state widths exist: Sparkle256 (4 branches),
//! Sparkle384 (6 branches) and Sparkle512 (8 branches), each with a *slim*
//! and a *big* step count.
//!
//! This crate is the primitive layer of the suite; the `esch` (hashing) and
//! `schwaemm` (AEAD) crates in this workspace drive it through the
//! [`SparkleVariant`] trait.
//!
//! ```
//! use sparkle::{big, Sparkle256, SparkleVariant};
//!
//! let mut state = [0u32; Sparkle256::STATE_WORDS];
//! big::<Sparkle256>(&mut state);
//! assert_ne!(state, [0u32; Sparkle256::STATE_WORDS]);
//! ```
#![no_std]

pub mod codec;
mod consts;
mod permutation;
mod variant;

#[cfg(test)]
mod tests;

pub use consts::ROUND_CONSTANTS;
pub use permutation::{big, ell, slim, try_permute, InvalidParams};
pub use variant::{Sparkle256, Sparkle384, Sparkle512, SparkleVariant};
