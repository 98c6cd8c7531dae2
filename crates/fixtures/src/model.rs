//! Data model for testbench fixtures
//!
//! A [`Suite`] is one hardware interface's fixture file; a [`TestCase`] is
//! one published test vector driven through that interface as an optional
//! initialization transaction followed by one transaction per block.

use tbvec_algorithms::FieldValue;
use tbvec_params::ProfileSpec;

/// A field name paired with its fixture value
pub type Assignment = (&'static str, FieldValue);

/// Placeholder replaced by the block index in array-name templates
pub const INDEX_PLACEHOLDER: &str = "{i}";

/// A setup transaction packed once ahead of the blocks
#[derive(Debug, Clone)]
pub struct InitPack {
    /// Array name
    pub name: &'static str,
    /// Layout the transaction is packed with
    pub profile: &'static ProfileSpec,
    /// Values replacing the case constants for this transaction
    pub overrides: Vec<Assignment>,
}

/// One per-block transaction
#[derive(Debug, Clone, Default)]
pub struct Block {
    /// Fields that change from block to block
    pub values: Vec<Assignment>,
    /// Expected output for this block, raw hex
    pub expected: Option<&'static str>,
}

impl Block {
    /// Block with the given per-block values
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Assignment>,
    {
        Self {
            values: values.into_iter().collect(),
            expected: None,
        }
    }

    /// Attach the block's expected output
    pub fn with_expected(mut self, hex: &'static str) -> Self {
        self.expected = Some(hex);
        self
    }
}

/// A named expected output, serialized in raw mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expected {
    /// Array name
    pub name: &'static str,
    /// Raw hex value, a whole number of words
    pub hex: &'static str,
}

/// One published test vector laid out for one interface
#[derive(Debug, Clone)]
pub struct TestCase {
    /// Case name, used in error context
    pub name: &'static str,
    /// Comment line emitted ahead of the case
    pub title: &'static str,
    /// Layout of the per-block transactions
    pub profile: &'static ProfileSpec,
    /// Values shared by every transaction of the case
    pub constants: Vec<Assignment>,
    /// Optional setup transaction
    pub init: Option<InitPack>,
    /// Per-block transactions, in order
    pub blocks: Vec<Block>,
    /// Expected outputs emitted after the blocks
    pub outputs: Vec<Expected>,
    /// Array-name template for block inputs
    pub block_name: &'static str,
    /// Array-name template for per-block expected outputs
    pub block_expected_name: &'static str,
}

impl TestCase {
    /// Empty case over `profile`; block arrays default to `<name>_block{i}`
    pub fn new(name: &'static str, title: &'static str, profile: &'static ProfileSpec) -> Self {
        Self {
            name,
            title,
            profile,
            constants: Vec::new(),
            init: None,
            blocks: Vec::new(),
            outputs: Vec::new(),
            block_name: "block{i}",
            block_expected_name: "expected_block{i}",
        }
    }

    /// Set a value shared by every transaction
    pub fn constant(mut self, field: &'static str, value: FieldValue) -> Self {
        self.constants.push((field, value));
        self
    }

    /// Add a setup transaction packed with `profile`
    pub fn init<I>(mut self, name: &'static str, profile: &'static ProfileSpec, overrides: I) -> Self
    where
        I: IntoIterator<Item = Assignment>,
    {
        self.init = Some(InitPack {
            name,
            profile,
            overrides: overrides.into_iter().collect(),
        });
        self
    }

    /// Append a block transaction
    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Append a trailing expected output
    pub fn output(mut self, name: &'static str, hex: &'static str) -> Self {
        self.outputs.push(Expected { name, hex });
        self
    }

    /// Set the array-name templates; `{i}` is replaced by the block index
    pub fn names(mut self, block: &'static str, block_expected: &'static str) -> Self {
        self.block_name = block;
        self.block_expected_name = block_expected;
        self
    }

    /// Look up a constant by field name
    pub fn constant_value(&self, field: &str) -> Option<&FieldValue> {
        self.constants.iter().find(|(n, _)| *n == field).map(|(_, v)| v)
    }
}

/// Expand an array-name template for block `index`
pub fn array_name(template: &str, index: usize) -> String {
    template.replace(INDEX_PLACEHOLDER, &index.to_string())
}

/// Fixtures for one testbench interface
#[derive(Debug, Clone)]
pub struct Suite {
    /// Registry name
    pub name: &'static str,
    /// Human-readable interface name
    pub title: &'static str,
    /// Where the test vectors come from
    pub reference: &'static str,
    /// Cases in declaration order
    pub cases: Vec<TestCase>,
}
