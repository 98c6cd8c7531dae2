//! Types shared across the tbvec crates

/// Width in bits of one register word on the testbench interface
pub const WORD_BITS: u32 = 32;

/// Number of hex digits rendered per word
pub const WORD_HEX_DIGITS: usize = (WORD_BITS / 4) as usize;

/// One 32-bit register word.
///
/// Arrays of words are ordered least-significant word first: index 0 holds
/// bits `[0, 32)` of the value they encode.
pub type Word = u32;

/// Direction in which a short hex literal is zero-filled to its field width.
///
/// The two directions put the literal's bytes at opposite ends of the field,
/// so a fixture must pick one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pad {
    /// Numeric padding: leading zero bytes, the literal keeps its integer value.
    #[default]
    Left,
    /// Trailing zero bytes: the literal occupies the most-significant end
    /// of the field.
    Right,
}

impl core::fmt::Display for Pad {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Pad::Left => write!(f, "left"),
            Pad::Right => write!(f, "right"),
        }
    }
}

/// Number of words needed to hold `bits` bits
#[inline]
pub const fn words_for_bits(bits: u32) -> usize {
    bits.div_ceil(WORD_BITS) as usize
}
