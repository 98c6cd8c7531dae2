//! Bit-field packing
//!
//! Fields are concatenated most-significant first and right-aligned in the
//! register, so the register's top `total_bits - sum(widths)` bits are zero.
//! Equivalently, the packed integer is `Σ value_i · 2^(widths after i)`.

use tbvec_api::{validate, Result};
use tracing::debug;

use crate::bitvec::BitVector;
use crate::field::Field;

/// Packs ordered fields into one fixed-width register
#[derive(Debug, Clone, Copy, Default)]
pub struct BitFieldPacker;

impl BitFieldPacker {
    /// Pack `fields` into a vector of exactly `total_bits` bits.
    ///
    /// Fails with `LayoutOverflow` if the widths exceed `total_bits` and with
    /// `FieldOverflow` if a value exceeds its field's width.
    pub fn pack(fields: &[Field], total_bits: u32) -> Result<BitVector> {
        let used_bits: u64 = fields.iter().map(|f| u64::from(f.width_bits())).sum();
        validate::layout_width("packed fields", used_bits, total_bits)?;

        let mut bits = BitVector::zeros(total_bits);
        // Walk from the least-significant field so each offset is a running sum.
        let mut offset = 0u32;
        for field in fields.iter().rev() {
            bits.insert(field.name(), offset, field.width_bits(), field.value())?;
            offset += field.width_bits();
        }

        debug!(
            fields = fields.len(),
            used_bits,
            padding_bits = u64::from(total_bits) - used_bits,
            "packed register"
        );
        Ok(bits)
    }
}
