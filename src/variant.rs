//! Security parameter abstraction for the Sparkle family.

/// Core trait describing one Sparkle permutation width.
///
/// Each variant fixes the branch count together with the step counts of its
/// slim and big strengths. Only the published combinations are expressible;
/// schemes pick a variant at compile time and never carry the parameters at
/// runtime.
pub trait SparkleVariant: Sized {
    /// Number of branches; each branch is a pair of 32-bit words.
    const BRANCHES: usize;
    /// State size in 32-bit words (twice the branch count).
    const STATE_WORDS: usize;
    /// Step count of the slim permutation, run between ordinary blocks.
    const SLIM_STEPS: usize;
    /// Step count of the big permutation, run after domain-separation
    /// injections.
    const BIG_STEPS: usize;
}

/// Sparkle permutation over a 256-bit state (4 branches).
#[derive(Clone)]
pub struct Sparkle256;
impl SparkleVariant for Sparkle256 {
    const BRANCHES: usize = 4;
    const STATE_WORDS: usize = 8;
    const SLIM_STEPS: usize = 7;
    const BIG_STEPS: usize = 10;
}

/// Sparkle permutation over a 384-bit state (6 branches).
#[derive(Clone)]
pub struct Sparkle384;
impl SparkleVariant for Sparkle384 {
    const BRANCHES: usize = 6;
    const STATE_WORDS: usize = 12;
    const SLIM_STEPS: usize = 7;
    const BIG_STEPS: usize = 11;
}

/// Sparkle permutation over a 512-bit state (8 branches).
#[derive(Clone)]
pub struct Sparkle512;
impl SparkleVariant for Sparkle512 {
    const BRANCHES: usize = 8;
    const STATE_WORDS: usize = 16;
    const SLIM_STEPS: usize = 8;
    const BIG_STEPS: usize = 12;
}
