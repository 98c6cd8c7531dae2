//! SNOW-V-GCM core

use std::collections::HashMap;

use tbvec_algorithms::FieldValue::{self, Uint};
use tbvec_params::SNOW_V;

use super::{insert, SuiteFn};
use crate::model::{Block, Suite, TestCase};

const KEY: &str = "faeadacabaaa9a8a7a6a5a4a3a2a1a0a5f5e5d5c5b5a59585756555453525150";
const IV: &str = "1032547698badcfeefcdab8967452301";

/// Register the suite
pub fn register(map: &mut HashMap<&'static str, SuiteFn>) {
    insert(map, "snow_v", suite);
}

/// SNOW-V-GCM fixtures
pub fn suite() -> Suite {
    Suite {
        name: "snow_v",
        title: "SNOW-V-GCM core",
        reference: "IACR ePrint 2018/1143, SNOW-V-GCM test vectors",
        cases: vec![tc4(), tc6()],
    }
}

// The setup transaction carries a zero block and no length adjustment.
fn with_common(case: TestCase, init: &'static str, encdec: u64) -> TestCase {
    case.constant("encdec_only", Uint(0))
        .constant("auth_only", Uint(0))
        .constant("encdec", Uint(encdec))
        .constant("key", FieldValue::hex(KEY))
        .constant("iv", FieldValue::hex(IV))
        .init(init, &SNOW_V, [("adj_len", Uint(0)), ("block", Uint(0))])
}

// Authentication of 16 bytes of AD, empty payload
fn tc4() -> TestCase {
    with_common(TestCase::new("tc4", "Test tc4", &SNOW_V), "tc4_init", 0)
        .constant("ad", FieldValue::hex("66656463626139383736353433323130"))
        .constant("ad_len", Uint(0x80))
        .constant("blocks_size", Uint(0))
        .output("tc4_expected_tag", "1abbdc5ab608df7a082c027ad7c80e25")
        .names("tc4_block{i}", "tc4_expected_block{i}")
}

// 15 bytes of AD, 33-byte payload; the last block holds a single byte
fn tc6() -> TestCase {
    with_common(TestCase::new("tc6", "Test tc6", &SNOW_V), "tc6_init", 1)
        .constant("ad", FieldValue::hex("2165756c6176207473657420444141"))
        .constant("ad_len", Uint(0x78))
        .constant("blocks_size", Uint(0x108))
        .block(
            Block::new([
                ("adj_len", Uint(0)),
                ("block", FieldValue::hex("66656463626139383736353433323130")),
            ])
            .with_expected("c1327ae807275082efa224b4b2017edd"),
        )
        .block(
            Block::new([
                ("adj_len", Uint(0)),
                ("block", FieldValue::hex("65646f6d20444145412d56776f6e5320")),
            ])
            .with_expected("1be95956a1b53e24127ffd1818d0b052"),
        )
        .block(
            Block::new([("adj_len", Uint(1)), ("block", FieldValue::hex("21"))])
                .with_expected("0000000000000000000000000000004c"),
        )
        .output("tc6_expected_tag", "9b02eed99a3e7c74de513ab7a5a67e90")
        .names("tc6_block{i}", "tc6_expected_block{i}")
}
