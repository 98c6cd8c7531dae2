//! AES-based interfaces: combined CTR/MAC core, CTR-only core and CMAC core

use super::{BLOCK_BITS, FLAG_BITS, KEY_BITS, LEN8_BITS};
use crate::profile::{FieldSpec, ProfileSpec};
use crate::INTERFACE_BITS;

/// Combined AES-CTR encryption / AES-CBC-MAC interface.
///
/// `enc_auth` selects MAC (1) or encryption (0), `keylen` selects AES-256
/// (1) or AES-128 (0), `final_size` is the bit length of a trailing partial
/// block (0 for a full block).
pub const AES_CTR_MAC: ProfileSpec = ProfileSpec {
    name: "aes_ctr_mac",
    fields: &[
        FieldSpec::new("enc_auth", FLAG_BITS),
        FieldSpec::new("counter", BLOCK_BITS),
        FieldSpec::new("key", KEY_BITS),
        FieldSpec::new("keylen", FLAG_BITS),
        FieldSpec::new("final_size", LEN8_BITS),
        FieldSpec::new("block", BLOCK_BITS),
    ],
    total_bits: INTERFACE_BITS,
};

/// CMAC key-load transaction
pub const CMAC_KEY_LOAD: ProfileSpec = ProfileSpec {
    name: "cmac_key",
    fields: &[
        FieldSpec::new("keylen", FLAG_BITS),
        FieldSpec::new("key", KEY_BITS),
    ],
    total_bits: INTERFACE_BITS,
};

/// CMAC per-block transaction; `finalize` marks the last block
pub const CMAC_BLOCK: ProfileSpec = ProfileSpec {
    name: "cmac_block",
    fields: &[
        FieldSpec::new("finalize", FLAG_BITS),
        FieldSpec::new("final_size", LEN8_BITS),
        FieldSpec::new("block", BLOCK_BITS),
    ],
    total_bits: INTERFACE_BITS,
};

/// AES-CTR core without a MAC path; each block carries its own counter
pub const AES_CTR_ONLY: ProfileSpec = ProfileSpec {
    name: "aes_ctr",
    fields: &[
        FieldSpec::new("counter", BLOCK_BITS),
        FieldSpec::new("key", KEY_BITS),
        FieldSpec::new("keylen", FLAG_BITS),
        FieldSpec::new("block", BLOCK_BITS),
    ],
    total_bits: INTERFACE_BITS,
};
