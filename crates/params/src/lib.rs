//! Register layout tables for cipher testbench interfaces
//!
//! Each hardware test interface loads one fixed-width input register. A
//! [`ProfileSpec`] names the fields of that register in order, first field
//! most significant, together with the register's total width. Fields do not
//! have to fill the register; the unused top bits are zero.
//!
//! Adding an interface means adding a table here, nothing else.

pub mod interfaces;
pub mod profile;

pub use interfaces::{
    aes::{AES_CTR_MAC, AES_CTR_ONLY, CMAC_BLOCK, CMAC_KEY_LOAD},
    snow_v::SNOW_V,
    zuc::ZUC_256,
};
pub use profile::{FieldSpec, ProfileSpec};

/// Width of every input register observed on the testbench interfaces
pub const INTERFACE_BITS: u32 = 1024;

/// Every profile, in table order
pub const ALL_PROFILES: &[&ProfileSpec] = &[
    &AES_CTR_MAC,
    &CMAC_KEY_LOAD,
    &CMAC_BLOCK,
    &AES_CTR_ONLY,
    &SNOW_V,
    &ZUC_256,
];

/// Look up a profile by name
pub fn profile(name: &str) -> Option<&'static ProfileSpec> {
    ALL_PROFILES.iter().copied().find(|p| p.name == name)
}
