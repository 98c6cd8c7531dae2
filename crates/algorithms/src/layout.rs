//! Validated register layouts
//!
//! A [`Layout`] is a [`ProfileSpec`] that has been checked once, at
//! construction: word-aligned total width, non-zero and uniquely named
//! fields, and fields that fit the total. Packing against a layout can then
//! only fail on the values themselves.

use std::borrow::Cow;
use std::collections::HashSet;

use tbvec_api::{validate, Error, Result};
use tbvec_params::{FieldSpec, ProfileSpec};
use tracing::debug;

use crate::bitvec::BitVector;
use crate::field::{Field, FieldValue};
use crate::pack::BitFieldPacker;

/// Ordered field schema of one interface register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    name: Cow<'static, str>,
    fields: Vec<FieldSpec>,
    total_bits: u32,
}

impl Layout {
    /// Build a layout, failing fast on a defective table
    pub fn new<N>(name: N, fields: &[FieldSpec], total_bits: u32) -> Result<Self>
    where
        N: Into<Cow<'static, str>>,
    {
        let name = name.into();
        validate::word_aligned(&name, u64::from(total_bits))?;

        let mut seen = HashSet::with_capacity(fields.len());
        for f in fields {
            validate::nonzero_width(f.name, f.width_bits)?;
            if !seen.insert(f.name) {
                return Err(Error::DuplicateField {
                    context: name.clone(),
                    field: Cow::Borrowed(f.name),
                });
            }
        }

        let used_bits: u64 = fields.iter().map(|f| u64::from(f.width_bits)).sum();
        validate::layout_width(&name, used_bits, total_bits)?;

        debug!(layout = %name, used_bits, total_bits, "layout validated");
        Ok(Self {
            name,
            fields: fields.to_vec(),
            total_bits,
        })
    }

    /// Build a layout from a static profile table
    pub fn from_spec(spec: &ProfileSpec) -> Result<Self> {
        Self::new(spec.name, spec.fields, spec.total_bits)
    }

    /// Layout name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields, most significant first
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Total register width
    pub fn total_bits(&self) -> u32 {
        self.total_bits
    }

    /// Sum of field widths
    pub fn used_bits(&self) -> u32 {
        self.fields.iter().map(|f| f.width_bits).sum()
    }

    /// Leading zero bits ahead of the first field
    pub fn padding_bits(&self) -> u32 {
        self.total_bits - self.used_bits()
    }

    /// Number of 32-bit words in a packed register
    pub fn word_count(&self) -> usize {
        tbvec_api::words_for_bits(self.total_bits)
    }

    /// Whether the layout declares `name`
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Bit offset of a field's least-significant bit
    pub fn offset_of(&self, name: &str) -> Option<u32> {
        let idx = self.fields.iter().position(|f| f.name == name)?;
        Some(self.fields[idx + 1..].iter().map(|f| f.width_bits).sum())
    }

    /// Fit named values to this layout's fields.
    ///
    /// Each field must be given exactly once and every given name must be a
    /// field of the layout. The result is in layout order.
    pub fn fields_from<'a, I>(&self, values: I) -> Result<Vec<Field>>
    where
        I: IntoIterator<Item = (&'a str, &'a FieldValue)>,
    {
        let mut slots: Vec<Option<&FieldValue>> = vec![None; self.fields.len()];
        for (name, value) in values {
            let idx = self
                .fields
                .iter()
                .position(|f| f.name == name)
                .ok_or_else(|| Error::UnknownField {
                    profile: self.name.clone(),
                    field: Cow::Owned(name.to_string()),
                })?;
            if slots[idx].replace(value).is_some() {
                return Err(Error::DuplicateField {
                    context: self.name.clone(),
                    field: Cow::Owned(name.to_string()),
                });
            }
        }

        self.fields
            .iter()
            .zip(slots)
            .map(|(spec, slot)| {
                let value = slot.ok_or_else(|| Error::MissingField {
                    profile: self.name.clone(),
                    field: Cow::Borrowed(spec.name),
                })?;
                Field::from_value(spec.name, spec.width_bits, value)
                    .map_err(|e| e.in_profile(&self.name))
            })
            .collect()
    }

    /// Pack named values into one register
    pub fn pack<'a, I>(&self, values: I) -> Result<BitVector>
    where
        I: IntoIterator<Item = (&'a str, &'a FieldValue)>,
    {
        let fields = self.fields_from(values)?;
        BitFieldPacker::pack(&fields, self.total_bits)
    }
}
