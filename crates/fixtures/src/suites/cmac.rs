//! AES-CMAC core: one key-load transaction, then one transaction per block

use std::collections::HashMap;

use tbvec_algorithms::FieldValue::{self, Uint};
use tbvec_params::{CMAC_BLOCK, CMAC_KEY_LOAD};

use super::{insert, SuiteFn};
use crate::model::{Block, Suite, TestCase};

const AES128_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const AES256_KEY: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";

const MESSAGE: [&str; 4] = [
    "6bc1bee22e409f96e93d7e117393172a",
    "ae2d8a571e03ac9c9eb76fac45af8e51",
    "30c81c46a35ce411e5fbc1191a0a52ef",
    "f69f2445df4f9b17ad2b417be66c3710",
];

/// Register the suite
pub fn register(map: &mut HashMap<&'static str, SuiteFn>) {
    insert(map, "cmac", suite);
}

/// CMAC fixtures
pub fn suite() -> Suite {
    Suite {
        name: "cmac",
        title: "AES-CMAC core",
        reference: "RFC 4493 appendix A, NIST CMAC examples (AES_CMAC.pdf)",
        cases: vec![tc3(), tc5(), tc7()],
    }
}

fn keyed(
    name: &'static str,
    title: &'static str,
    key_array: &'static str,
    key: FieldValue,
    keylen: u64,
) -> TestCase {
    TestCase::new(name, title, &CMAC_BLOCK)
        .constant("keylen", Uint(keylen))
        .constant("key", key)
        .init(key_array, &CMAC_KEY_LOAD, [])
}

fn block(finalize: u64, final_size: u64, data: FieldValue) -> Block {
    Block::new([
        ("finalize", Uint(finalize)),
        ("final_size", Uint(final_size)),
        ("block", data),
    ])
}

// Empty message: a single all-zero final block of size 0
fn tc3() -> TestCase {
    keyed("tc3", "Test tc3", "tc3_key", FieldValue::hex_right(AES128_KEY), 0)
        .block(block(1, 0x00, FieldValue::hex("00000000000000000000000000000000")))
        .output("tc3_expected", "bb1d6929e95937287fa37d129b756746")
        .names("tc3_block{i}", "tc3_expected{i}")
}

// 40-byte message, last block 64 bits
fn tc5() -> TestCase {
    keyed("tc5", "Test tc5", "tc5_key", FieldValue::hex_right(AES128_KEY), 0)
        .block(block(0, 0x00, FieldValue::hex(MESSAGE[0])))
        .block(block(0, 0x00, FieldValue::hex(MESSAGE[1])))
        .block(block(1, 0x40, FieldValue::hex_right("30c81c46a35ce411")))
        .output("tc5_expected", "dfa66747de9ae63030ca32611497c827")
        .names("tc5_block{i}", "tc5_expected{i}")
}

// AES-256, 64-byte message
fn tc7() -> TestCase {
    keyed("tc7", "Test tc7", "tc7_key", FieldValue::hex(AES256_KEY), 1)
        .block(block(0, 0x00, FieldValue::hex(MESSAGE[0])))
        .block(block(0, 0x00, FieldValue::hex(MESSAGE[1])))
        .block(block(0, 0x00, FieldValue::hex(MESSAGE[2])))
        .block(block(1, 0x80, FieldValue::hex(MESSAGE[3])))
        .output("tc7_expected", "e1992190549f6ed5696a2c056c315410")
        .names("tc7_block{i}", "tc7_expected{i}")
}
