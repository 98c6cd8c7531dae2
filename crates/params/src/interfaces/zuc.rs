//! ZUC-256 interface

use super::{BLOCK_BITS, FLAG_BITS, KEY_BITS, LEN8_BITS};
use crate::profile::{FieldSpec, ProfileSpec};
use crate::INTERFACE_BITS;

/// ZUC-256 combined keystream / MAC register.
///
/// `i_len` is the message length in bits of the final MAC block and
/// `tag_len` the tag length in bits; both are zero for keystream use.
pub const ZUC_256: ProfileSpec = ProfileSpec {
    name: "zuc256",
    fields: &[
        FieldSpec::new("enc_auth", FLAG_BITS),
        FieldSpec::new("key", KEY_BITS),
        FieldSpec::new("iv", BLOCK_BITS),
        FieldSpec::new("block", BLOCK_BITS),
        FieldSpec::new("i_len", LEN8_BITS),
        FieldSpec::new("tag_len", LEN8_BITS),
    ],
    total_bits: INTERFACE_BITS,
};
