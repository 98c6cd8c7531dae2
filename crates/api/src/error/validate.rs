//! Validation utilities for layouts, fields and literals

use super::{Error, Result};
use crate::types::{WORD_BITS, WORD_HEX_DIGITS};
use std::borrow::Cow;

/// Validate that a value of `needed_bits` fits a field of `width_bits`
#[inline(always)]
pub fn field_width(field: &str, needed_bits: u64, width_bits: u32) -> Result<()> {
    if needed_bits > u64::from(width_bits) {
        return Err(Error::FieldOverflow {
            field: Cow::Owned(field.to_string()),
            width_bits,
            needed_bits,
        });
    }
    Ok(())
}

/// Validate that fields occupying `used_bits` fit a layout of `total_bits`
#[inline(always)]
pub fn layout_width(profile: &str, used_bits: u64, total_bits: u32) -> Result<()> {
    if used_bits > u64::from(total_bits) {
        return Err(Error::LayoutOverflow {
            profile: Cow::Owned(profile.to_string()),
            used_bits,
            total_bits,
        });
    }
    Ok(())
}

/// Validate that a width is a whole, non-zero number of words
#[inline(always)]
pub fn word_aligned(context: &str, bits: u64) -> Result<()> {
    if bits == 0 || bits % u64::from(WORD_BITS) != 0 {
        return Err(Error::Alignment {
            context: Cow::Owned(context.to_string()),
            bits,
            reason: "must be a non-zero multiple of 32",
        });
    }
    Ok(())
}

/// Validate that a field width is non-zero
#[inline(always)]
pub fn nonzero_width(field: &str, width_bits: u32) -> Result<()> {
    if width_bits == 0 {
        return Err(Error::Alignment {
            context: Cow::Owned(field.to_string()),
            bits: 0,
            reason: "field width must be non-zero",
        });
    }
    Ok(())
}

/// Validate that a raw hex literal splits into whole words
#[inline(always)]
pub fn hex_length(context: &str, digits: usize) -> Result<()> {
    if digits == 0 {
        return Err(Error::format(context.to_string(), "empty literal"));
    }
    if digits % WORD_HEX_DIGITS != 0 {
        return Err(Error::format(
            context.to_string(),
            format!("{} digits is not a multiple of {}", digits, WORD_HEX_DIGITS),
        ));
    }
    Ok(())
}
