//! Constants shared by every Sparkle instance.

/// The eight Sparkle round constants.
///
/// Constant `i mod 8` is XORed into the second state word at the start of
/// step `i`; constant `j` doubles as the Alzette round key of branch `j`.
pub const ROUND_CONSTANTS: [u32; 8] = [
    0xB7E1_5162,
    0xBF71_5880,
    0x38B4_DA56,
    0x324E_7738,
    0xBB11_85EB,
    0x4F7C_7B57,
    0xCFBF_A1C8,
    0xC2B3_293D,
];
