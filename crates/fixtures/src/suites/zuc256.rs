//! ZUC-256 keystream / MAC core

use std::collections::HashMap;

use tbvec_algorithms::FieldValue::{self, Uint};
use tbvec_params::ZUC_256;

use super::{insert, SuiteFn};
use crate::model::{Block, Suite, TestCase};

const KEY: &str = "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";
const IV: &str = "ffffffffffffffffffffffffffffffff";

/// Register the suite
pub fn register(map: &mut HashMap<&'static str, SuiteFn>) {
    insert(map, "zuc256", suite);
}

/// ZUC-256 fixtures
pub fn suite() -> Suite {
    Suite {
        name: "zuc256",
        title: "ZUC-256 core",
        reference: "ZUC-256 stream cipher design document, test vectors (is.cas.cn)",
        cases: vec![keystream(), mac()],
    }
}

// One keystream word per transaction; the payload word sits in the low
// 32 bits of the block
fn keystream() -> TestCase {
    let words = [
        ("01020304", "3887e1ab"),
        ("05060708", "3035d321"),
        ("090a0b0c", "3a8f8bfc"),
        ("0d0e0f00", "edd603e9"),
    ];
    let case = TestCase::new("ctr", "Test encryption", &ZUC_256)
        .constant("enc_auth", Uint(0))
        .constant("key", FieldValue::hex(KEY))
        .constant("iv", FieldValue::hex(IV))
        .constant("i_len", Uint(0x00))
        .constant("tag_len", Uint(0x00))
        .names("ctr{i}", "ctr{i}_expected");

    words.into_iter().fold(case, |case, (data, expected)| {
        case.block(Block::new([("block", FieldValue::hex(data))]).with_expected(expected))
    })
}

// 160-bit message of 0x11 bytes, 128-bit tag
fn mac() -> TestCase {
    TestCase::new("mac", "Test MAC", &ZUC_256)
        .constant("enc_auth", Uint(1))
        .constant("key", FieldValue::hex(KEY))
        .constant("iv", FieldValue::hex(IV))
        .constant("i_len", Uint(0x20))
        .constant("tag_len", Uint(0x80))
        .block(Block::new([("block", FieldValue::hex("11111111111111111111111111111111"))]))
        .block(Block::new([("block", FieldValue::hex_right("11111111"))]))
        .output("mac_expected", "dd3a4017357803a51c3fb9a57a96feda")
        .names("mac{i}", "mac{i}_expected")
}
