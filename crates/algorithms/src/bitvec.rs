//! Fixed-width bit vector
//!
//! A [`BitVector`] is an unsigned integer that never grows past a declared
//! width. Every insertion is width-checked, so a value that does not fit is
//! an error instead of silently widening the vector.

use std::borrow::Cow;

use num_bigint::BigUint;
use tbvec_api::{validate, Error, Result};
use tracing::trace;

/// Unsigned integer of a fixed bit width
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    value: BigUint,
    len_bits: u32,
}

impl BitVector {
    /// An all-zero vector of `len_bits` bits
    pub fn zeros(len_bits: u32) -> Self {
        Self {
            value: BigUint::default(),
            len_bits,
        }
    }

    /// Wrap an existing integer, checking that it fits `len_bits`
    pub fn from_biguint(value: BigUint, len_bits: u32) -> Result<Self> {
        validate::field_width("bit vector", value.bits(), len_bits)?;
        Ok(Self { value, len_bits })
    }

    /// Declared width in bits
    pub fn len_bits(&self) -> u32 {
        self.len_bits
    }

    /// The vector as an integer
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Read bit `index` counting from the least-significant end
    pub fn bit(&self, index: u32) -> bool {
        index < self.len_bits && self.value.bit(u64::from(index))
    }

    /// Number of zero bits above the highest set bit
    pub fn leading_zeros(&self) -> u64 {
        u64::from(self.len_bits) - self.value.bits()
    }

    /// Write `value` into the `width_bits` bits starting at bit `offset`.
    ///
    /// The target bits must currently be zero; `value` must fit `width_bits`
    /// and the field must lie inside the vector.
    pub fn insert(
        &mut self,
        name: &str,
        offset: u32,
        width_bits: u32,
        value: &BigUint,
    ) -> Result<()> {
        validate::field_width(name, value.bits(), width_bits)?;
        validate::layout_width(
            name,
            u64::from(offset) + u64::from(width_bits),
            self.len_bits,
        )?;
        let mask = (BigUint::from(1u8) << width_bits) - 1u8;
        if (&self.value >> offset) & mask != BigUint::default() {
            return Err(Error::Alignment {
                context: Cow::Owned(name.to_string()),
                bits: u64::from(offset),
                reason: "field overlaps bits already written",
            });
        }
        trace!(field = name, offset, width_bits, "insert field");
        self.value |= value << offset;
        Ok(())
    }

    /// Render as lowercase hex, zero-filled to the full width
    pub fn to_hex(&self) -> String {
        let digits = self.len_bits.div_ceil(4) as usize;
        format!("{:0>width$}", self.value.to_str_radix(16), width = digits)
    }
}
