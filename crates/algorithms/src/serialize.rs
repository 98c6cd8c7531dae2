//! Word serialization
//!
//! Both modes emit words least-significant first: word `i` holds bits
//! `[32·i, 32·i + 32)` of the value.

use num_bigint::BigUint;
use tbvec_api::{validate, Result, Word, WORD_BITS};
use tbvec_internal::{decode_literal, words_from_be_bytes};

use crate::bitvec::BitVector;

/// Splits packed registers and raw hex values into 32-bit words
#[derive(Debug, Clone, Copy, Default)]
pub struct WordSerializer;

impl WordSerializer {
    /// Split a packed vector into `len_bits / 32` words
    pub fn to_words(bits: &BitVector) -> Result<Vec<Word>> {
        validate::word_aligned("packed vector", u64::from(bits.len_bits()))?;
        let count = (bits.len_bits() / WORD_BITS) as usize;

        let mut words: Vec<Word> = bits.value().iter_u32_digits().collect();
        // BitVector guarantees the value fits, so this only ever extends.
        words.resize(count, 0);
        Ok(words)
    }

    /// Split a raw hex literal into `len(hex) / 8` words.
    ///
    /// No header fields and no padding: the last eight digits become word 0.
    /// Used for expected outputs only.
    pub fn to_words_raw(context: &str, hex: &str) -> Result<Vec<Word>> {
        let digits = hex.strip_prefix("0x").unwrap_or(hex);
        validate::hex_length(context, digits.len())?;
        let bytes = decode_literal(context, digits)?;
        Ok(words_from_be_bytes(&bytes))
    }

    /// Reassemble words into the integer `Σ word[i] · 2^(32·i)`
    pub fn from_words(words: &[Word]) -> BigUint {
        BigUint::from_slice(words)
    }
}
