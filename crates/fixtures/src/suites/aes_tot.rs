//! Combined AES-CTR / AES-CBC-MAC core

use std::collections::HashMap;

use tbvec_algorithms::FieldValue::{self, Uint};
use tbvec_params::AES_CTR_MAC;

use super::{insert, SuiteFn};
use crate::model::{Block, Suite, TestCase};

const AES256_KEY: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";
const AES128_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";

/// Register the suite
pub fn register(map: &mut HashMap<&'static str, SuiteFn>) {
    insert(map, "aes_tot", suite);
}

/// Encryption and MAC fixtures for the combined core
pub fn suite() -> Suite {
    Suite {
        name: "aes_tot",
        title: "AES-CTR / AES-CBC-MAC combined core",
        reference: "NIST SP 800-38A F.5.5, RFC 4493 example 3",
        cases: vec![encryption(), mac()],
    }
}

// SP 800-38A F.5.5, first block and the first half of the second
fn encryption() -> TestCase {
    TestCase::new("ctr", "Test encryption", &AES_CTR_MAC)
        .constant("enc_auth", Uint(0))
        .constant("counter", FieldValue::hex("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff"))
        .constant("key", FieldValue::hex(AES256_KEY))
        .constant("keylen", Uint(1))
        .block(
            Block::new([
                ("final_size", Uint(0x00)),
                ("block", FieldValue::hex("6bc1bee22e409f96e93d7e117393172a")),
            ])
            .with_expected("601ec313775789a5b7a7f504bbf3d228"),
        )
        .block(
            Block::new([
                ("final_size", Uint(0x40)),
                ("block", FieldValue::hex("9eb76fac45af8e51")),
            ])
            .with_expected("0000000000000000ca84e990cacaf5c5"),
        )
        .names("ctr{i}", "ctr{i}_expected")
}

// RFC 4493 example 3 (40-byte message), AES-128
fn mac() -> TestCase {
    TestCase::new("mac", "Test MAC", &AES_CTR_MAC)
        .constant("enc_auth", Uint(1))
        .constant("counter", Uint(0))
        .constant("key", FieldValue::hex_right(AES128_KEY))
        .constant("keylen", Uint(0))
        .block(Block::new([
            ("final_size", Uint(0x00)),
            ("block", FieldValue::hex("6bc1bee22e409f96e93d7e117393172a")),
        ]))
        .block(Block::new([
            ("final_size", Uint(0x00)),
            ("block", FieldValue::hex("ae2d8a571e03ac9c9eb76fac45af8e51")),
        ]))
        .block(Block::new([
            ("final_size", Uint(0x40)),
            ("block", FieldValue::hex("30c81c46a35ce4110000000000000000")),
        ]))
        .output("mac_expected", "dfa66747de9ae63030ca32611497c827")
        .names("mac_block{i}", "mac_expected{i}")
}
