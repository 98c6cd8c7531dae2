//! SNOW-V-GCM interface

use super::{BLOCK_BITS, FLAG_BITS, KEY_BITS};
use crate::profile::{FieldSpec, ProfileSpec};
use crate::INTERFACE_BITS;

/// Width of the associated-data and payload length fields
pub const LENGTH_BITS: u32 = 64;

/// SNOW-V-GCM register: mode flags, key/IV/AD, and the running block.
///
/// `adj_len` marks a final block shorter than 128 bits; `ad_len` and
/// `blocks_size` are bit lengths of the associated data and the payload.
pub const SNOW_V: ProfileSpec = ProfileSpec {
    name: "snow_v",
    fields: &[
        FieldSpec::new("encdec_only", FLAG_BITS),
        FieldSpec::new("auth_only", FLAG_BITS),
        FieldSpec::new("encdec", FLAG_BITS),
        FieldSpec::new("adj_len", FLAG_BITS),
        FieldSpec::new("key", KEY_BITS),
        FieldSpec::new("iv", BLOCK_BITS),
        FieldSpec::new("ad", BLOCK_BITS),
        FieldSpec::new("ad_len", LENGTH_BITS),
        FieldSpec::new("block", BLOCK_BITS),
        FieldSpec::new("blocks_size", LENGTH_BITS),
    ],
    total_bits: INTERFACE_BITS,
};
