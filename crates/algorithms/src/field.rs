//! Field values and their width-checked resolution

use std::borrow::Cow;

use num_bigint::BigUint;
use tbvec_api::{validate, Error, Pad, Result};
use tbvec_internal::literal_to_biguint;

/// A value as written in a fixture, before it is fitted to a field width
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    /// Small integer such as a flag, a length or a final-block size
    Uint(u64),

    /// Hex byte string, zero-filled towards `pad` when shorter than the field
    Hex {
        /// Hex digits, even count, optional `0x` prefix
        literal: Cow<'static, str>,
        /// Which end of the field receives the zero fill
        pad: Pad,
    },
}

impl FieldValue {
    /// Hex literal padded numerically (leading zeros)
    pub const fn hex(literal: &'static str) -> Self {
        FieldValue::Hex {
            literal: Cow::Borrowed(literal),
            pad: Pad::Left,
        }
    }

    /// Hex literal padded with trailing zero bytes
    pub const fn hex_right(literal: &'static str) -> Self {
        FieldValue::Hex {
            literal: Cow::Borrowed(literal),
            pad: Pad::Right,
        }
    }

    /// Fit the value to a field of `width_bits`.
    ///
    /// A hex literal longer than the field's byte width is rejected even when
    /// its leading bytes are zero.
    pub fn resolve(&self, field: &str, width_bits: u32) -> Result<BigUint> {
        match self {
            FieldValue::Uint(v) => {
                validate::field_width(field, u64::from(64 - v.leading_zeros()), width_bits)?;
                Ok(BigUint::from(*v))
            }
            FieldValue::Hex { literal, pad } => {
                let (value, len_bytes) = literal_to_biguint(field, literal)?;
                let literal_bits = 8 * len_bytes as u64;
                match pad {
                    Pad::Left => {
                        let field_bits = u64::from(width_bits.div_ceil(8)) * 8;
                        if literal_bits > field_bits {
                            return Err(overflow(field, width_bits, literal_bits));
                        }
                        validate::field_width(field, value.bits(), width_bits)?;
                        Ok(value)
                    }
                    Pad::Right => {
                        validate::field_width(field, literal_bits, width_bits)?;
                        Ok(value << (u64::from(width_bits) - literal_bits))
                    }
                }
            }
        }
    }
}

fn overflow(field: &str, width_bits: u32, needed_bits: u64) -> Error {
    Error::FieldOverflow {
        field: Cow::Owned(field.to_string()),
        width_bits,
        needed_bits,
    }
}

/// A named value fitted to its width, ready for packing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    name: Cow<'static, str>,
    width_bits: u32,
    value: BigUint,
}

impl Field {
    /// Create a field, rejecting a value wider than `width_bits`
    pub fn new<N, V>(name: N, width_bits: u32, value: V) -> Result<Self>
    where
        N: Into<Cow<'static, str>>,
        V: Into<BigUint>,
    {
        let name = name.into();
        let value = value.into();
        validate::nonzero_width(&name, width_bits)?;
        validate::field_width(&name, value.bits(), width_bits)?;
        Ok(Self {
            name,
            width_bits,
            value,
        })
    }

    /// Resolve a fixture value against a field width
    pub fn from_value<N>(name: N, width_bits: u32, value: &FieldValue) -> Result<Self>
    where
        N: Into<Cow<'static, str>>,
    {
        let name = name.into();
        let resolved = value.resolve(&name, width_bits)?;
        Self::new(name, width_bits, resolved)
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width in bits
    pub fn width_bits(&self) -> u32 {
        self.width_bits
    }

    /// Value, right-justified in the field
    pub fn value(&self) -> &BigUint {
        &self.value
    }
}
