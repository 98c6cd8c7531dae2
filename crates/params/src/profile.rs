//! Layout table records

/// One named field of an interface register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Field name, as used by fixture cases
    pub name: &'static str,

    /// Width in bits
    pub width_bits: u32,
}

impl FieldSpec {
    /// Create a field record
    pub const fn new(name: &'static str, width_bits: u32) -> Self {
        Self { name, width_bits }
    }
}

/// Register layout of one testbench interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileSpec {
    /// Profile name
    pub name: &'static str,

    /// Fields, most significant first
    pub fields: &'static [FieldSpec],

    /// Total register width in bits
    pub total_bits: u32,
}

impl ProfileSpec {
    /// Sum of all field widths
    pub fn used_bits(&self) -> u64 {
        self.fields.iter().map(|f| u64::from(f.width_bits)).sum()
    }

    /// Number of zero bits ahead of the first field
    pub fn padding_bits(&self) -> u64 {
        u64::from(self.total_bits).saturating_sub(self.used_bits())
    }

    /// Find a field by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
