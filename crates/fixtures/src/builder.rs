//! Drives one test case through its layouts

use std::borrow::Cow;

use tbvec_algorithms::{FieldValue, Layout, WordSerializer};
use tbvec_api::{Error, Result, Word};
use tracing::debug;

use crate::model::{array_name, Assignment, TestCase};

/// What a word array holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayKind {
    /// Packed setup transaction
    Init,
    /// Packed per-block transaction
    Block,
    /// Raw expected output
    Expected,
}

/// A named, ordered word array, word 0 least significant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordArray {
    /// Declaration name
    pub name: String,
    /// Role in the case
    pub kind: ArrayKind,
    /// Words, least-significant first
    pub words: Vec<Word>,
}

/// Every array of one case, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltCase {
    /// Case name
    pub name: &'static str,
    /// Case title
    pub title: &'static str,
    /// Arrays: init, then each block followed by its expected output, then
    /// trailing outputs
    pub arrays: Vec<WordArray>,
}

impl BuiltCase {
    /// Find an array by name
    pub fn array(&self, name: &str) -> Option<&WordArray> {
        self.arrays.iter().find(|a| a.name == name)
    }

    /// Total number of words across all arrays
    pub fn word_count(&self) -> usize {
        self.arrays.iter().map(|a| a.words.len()).sum()
    }
}

/// Packs and serializes one test case
#[derive(Debug)]
pub struct VectorBuilder<'c> {
    case: &'c TestCase,
    layout: Layout,
    init_layout: Option<Layout>,
}

impl<'c> VectorBuilder<'c> {
    /// Validate the case's layouts and its constants
    pub fn new(case: &'c TestCase) -> Result<Self> {
        let layout = Layout::from_spec(case.profile)?;
        let init_layout = case
            .init
            .as_ref()
            .map(|init| Layout::from_spec(init.profile))
            .transpose()?;

        let builder = Self {
            case,
            layout,
            init_layout,
        };
        builder.check_constants()?;
        Ok(builder)
    }

    /// Every constant must belong to a layout the case packs with
    fn check_constants(&self) -> Result<()> {
        for (i, (name, _)) in self.case.constants.iter().enumerate() {
            if self.case.constants[..i].iter().any(|(n, _)| n == name) {
                return Err(Error::DuplicateField {
                    context: Cow::Borrowed(self.case.name),
                    field: Cow::Borrowed(*name),
                });
            }
            let known = self.layout.has_field(name)
                || self.init_layout.as_ref().is_some_and(|l| l.has_field(name));
            if !known {
                return Err(Error::UnknownField {
                    profile: Cow::Owned(self.layout.name().to_string()),
                    field: Cow::Borrowed(*name),
                });
            }
        }
        Ok(())
    }

    /// Values for one transaction: overrides first, then case constants
    fn assignments<'v>(
        &'v self,
        layout: &Layout,
        overrides: &'v [Assignment],
    ) -> Result<Vec<(&'v str, &'v FieldValue)>> {
        for (name, _) in overrides {
            if !layout.has_field(name) {
                return Err(Error::UnknownField {
                    profile: Cow::Owned(layout.name().to_string()),
                    field: Cow::Borrowed(*name),
                });
            }
        }

        let mut values: Vec<(&str, &FieldValue)> =
            overrides.iter().map(|(n, v)| (*n, v)).collect();
        for spec in layout.fields() {
            if overrides.iter().any(|(n, _)| *n == spec.name) {
                continue;
            }
            if let Some(value) = self.case.constant_value(spec.name) {
                values.push((spec.name, value));
            }
        }
        Ok(values)
    }

    fn pack(&self, layout: &Layout, overrides: &[Assignment]) -> Result<Vec<Word>> {
        let values = self.assignments(layout, overrides)?;
        let bits = layout.pack(values)?;
        WordSerializer::to_words(&bits)
    }

    /// Words of the setup transaction, if the case has one
    pub fn pack_init(&self) -> Result<Option<WordArray>> {
        let (Some(init), Some(layout)) = (&self.case.init, &self.init_layout) else {
            return Ok(None);
        };
        let words = self.pack(layout, &init.overrides)?;
        debug!(case = self.case.name, array = init.name, "packed init");
        Ok(Some(WordArray {
            name: init.name.to_string(),
            kind: ArrayKind::Init,
            words,
        }))
    }

    /// Words of block `index`
    pub fn pack_block(&self, index: usize) -> Result<WordArray> {
        let block = self.case.blocks.get(index).ok_or_else(|| Error::MissingField {
            profile: Cow::Borrowed(self.case.name),
            field: Cow::Owned(format!("block {}", index)),
        })?;
        let name = array_name(self.case.block_name, index);
        let words = self.pack(&self.layout, &block.values)?;
        debug!(case = self.case.name, array = %name, "packed block");
        Ok(WordArray {
            name,
            kind: ArrayKind::Block,
            words,
        })
    }

    /// Words of a raw expected output
    pub fn expected(&self, name: String, hex: &str) -> Result<WordArray> {
        let words = WordSerializer::to_words_raw(&name, hex)?;
        Ok(WordArray {
            name,
            kind: ArrayKind::Expected,
            words,
        })
    }

    /// Build every array of the case, or fail without partial output
    pub fn build(&self) -> Result<BuiltCase> {
        let mut arrays = Vec::with_capacity(1 + 2 * self.case.blocks.len() + self.case.outputs.len());

        if let Some(init) = self.pack_init()? {
            arrays.push(init);
        }
        for (i, block) in self.case.blocks.iter().enumerate() {
            arrays.push(self.pack_block(i)?);
            if let Some(hex) = block.expected {
                arrays.push(self.expected(array_name(self.case.block_expected_name, i), hex)?);
            }
        }
        for out in &self.case.outputs {
            arrays.push(self.expected(out.name.to_string(), out.hex)?);
        }

        Ok(BuiltCase {
            name: self.case.name,
            title: self.case.title,
            arrays,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;
    use tbvec_params::{CMAC_BLOCK, CMAC_KEY_LOAD, SNOW_V};

    fn cmac_case() -> TestCase {
        TestCase::new("tc", "Test", &CMAC_BLOCK)
            .constant("keylen", FieldValue::Uint(0))
            .constant("key", FieldValue::hex_right("2b7e151628aed2a6abf7158809cf4f3c"))
            .init("tc_key", &CMAC_KEY_LOAD, [])
            .block(Block::new([
                ("finalize", FieldValue::Uint(1)),
                ("final_size", FieldValue::Uint(0x40)),
                ("block", FieldValue::hex_right("30c81c46a35ce411")),
            ]))
            .output("tc_expected", "dfa66747de9ae63030ca32611497c827")
            .names("tc_block{i}", "tc_expected{i}")
    }

    #[test]
    fn test_build_orders_arrays() {
        let case = cmac_case();
        let built = VectorBuilder::new(&case).unwrap().build().unwrap();
        let names: Vec<_> = built.arrays.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["tc_key", "tc_block0", "tc_expected"]);
        assert_eq!(built.arrays[0].kind, ArrayKind::Init);
        assert_eq!(built.arrays[2].kind, ArrayKind::Expected);
        assert_eq!(built.word_count(), 32 + 32 + 4);
    }

    #[test]
    fn test_cmac_final_block_words() {
        let case = cmac_case();
        let block = VectorBuilder::new(&case).unwrap().pack_block(0).unwrap();
        assert_eq!(block.words.len(), 32);
        assert_eq!(block.words[0], 0x0000_0000);
        assert_eq!(block.words[1], 0x0000_0000);
        assert_eq!(block.words[2], 0xa35c_e411);
        assert_eq!(block.words[3], 0x30c8_1c46);
        // finalize at bit 136, final_size at bits 128..136
        assert_eq!(block.words[4], 0x0000_0140);
        assert!(block.words[5..].iter().all(|w| *w == 0));
    }

    #[test]
    fn test_cmac_key_load_words() {
        let case = cmac_case();
        let init = VectorBuilder::new(&case).unwrap().pack_init().unwrap().unwrap();
        // AES-128 key zero-filled on the right: low 128 bits empty
        assert!(init.words[..4].iter().all(|w| *w == 0));
        assert_eq!(init.words[4], 0x09cf_4f3c);
        assert_eq!(init.words[7], 0x2b7e_1516);
        // keylen sits at bit 256
        assert_eq!(init.words[8], 0);
    }

    #[test]
    fn test_unknown_constant_rejected() {
        let case = cmac_case().constant("nonce", FieldValue::Uint(0));
        assert!(matches!(VectorBuilder::new(&case), Err(Error::UnknownField { .. })));
    }

    #[test]
    fn test_duplicate_constant_rejected() {
        let case = cmac_case().constant("keylen", FieldValue::Uint(1));
        assert!(matches!(VectorBuilder::new(&case), Err(Error::DuplicateField { .. })));
    }

    #[test]
    fn test_unknown_block_field_rejected() {
        let case = cmac_case().block(Block::new([("adj_len", FieldValue::Uint(1))]));
        let builder = VectorBuilder::new(&case).unwrap();
        assert!(matches!(builder.build(), Err(Error::UnknownField { .. })));
    }

    #[test]
    fn test_missing_block_field_rejected() {
        let case = cmac_case().block(Block::new([("finalize", FieldValue::Uint(1))]));
        let builder = VectorBuilder::new(&case).unwrap();
        assert!(matches!(builder.pack_block(1), Err(Error::MissingField { .. })));
    }

    #[test]
    fn test_overflowing_flag_fails_whole_case() {
        let case = cmac_case().block(Block::new([
            ("finalize", FieldValue::Uint(0)),
            ("final_size", FieldValue::Uint(256)),
            ("block", FieldValue::hex("00")),
        ]));
        let builder = VectorBuilder::new(&case).unwrap();
        assert!(matches!(
            builder.build(),
            Err(Error::FieldOverflow { width_bits: 8, needed_bits: 9, .. })
        ));
    }

    #[test]
    fn test_init_override_replaces_constant() {
        let case = TestCase::new("tc", "Test", &SNOW_V)
            .constant("encdec_only", FieldValue::Uint(0))
            .constant("auth_only", FieldValue::Uint(0))
            .constant("encdec", FieldValue::Uint(1))
            .constant("key", FieldValue::Uint(0))
            .constant("iv", FieldValue::Uint(0))
            .constant("ad", FieldValue::Uint(0))
            .constant("ad_len", FieldValue::Uint(0))
            .constant("blocks_size", FieldValue::Uint(0))
            .constant("block", FieldValue::hex("ff"))
            .init("tc_init", &SNOW_V, [("adj_len", FieldValue::Uint(0)), ("block", FieldValue::Uint(0))]);
        let init = VectorBuilder::new(&case).unwrap().pack_init().unwrap().unwrap();
        // block lives at bits 64..192; the override zeroes it
        assert_eq!(init.words[2], 0);
        // encdec flag at bit 769
        assert_eq!(init.words[24], 0x0000_0002);
    }
}
