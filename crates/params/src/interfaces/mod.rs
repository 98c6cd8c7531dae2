//! Interface tables grouped by cipher family

pub mod aes;
pub mod snow_v;
pub mod zuc;

/// Width of a 128-bit block, counter, IV or tag field
pub const BLOCK_BITS: u32 = 128;

/// Width of a key field; AES-128 keys are zero-filled into it
pub const KEY_BITS: u32 = 256;

/// Width of a single-bit flag field
pub const FLAG_BITS: u32 = 1;

/// Width of a byte-sized length field
pub const LEN8_BITS: u32 = 8;
