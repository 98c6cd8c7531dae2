//! AES-CTR core without MAC path

use std::collections::HashMap;

use tbvec_algorithms::FieldValue::{self, Uint};
use tbvec_params::AES_CTR_ONLY;

use super::{insert, SuiteFn};
use crate::model::{Block, Suite, TestCase};

const AES128_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const AES256_KEY: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";

const COUNTERS: [&str; 4] = [
    "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff",
    "f0f1f2f3f4f5f6f7f8f9fafbfcfdff00",
    "f0f1f2f3f4f5f6f7f8f9fafbfcfdff01",
    "f0f1f2f3f4f5f6f7f8f9fafbfcfdff02",
];

const PLAINTEXTS: [&str; 4] = [
    "6bc1bee22e409f96e93d7e117393172a",
    "ae2d8a571e03ac9c9eb76fac45af8e51",
    "30c81c46a35ce411e5fbc1191a0a52ef",
    "f69f2445df4f9b17ad2b417be66c3710",
];

// F.5.1 CTR-AES128.Encrypt
const CTR_128_CIPHERTEXTS: [&str; 4] = [
    "874d6191b620e3261bef6864990db6ce",
    "9806f66b7970fdff8617187bb9fffdff",
    "5ae4df3edbd5d35e5b4f09020db03eab",
    "1e031dda2fbe03d1792170a0f3009cee",
];

// F.5.5 CTR-AES256.Encrypt
const CTR_256_CIPHERTEXTS: [&str; 4] = [
    "601ec313775789a5b7a7f504bbf3d228",
    "f443e3ca4d62b59aca84e990cacaf5c5",
    "2b0930daa23de94ce87017ba2d84988d",
    "dfc9c58db67aada613c2dd08457941a6",
];

/// Register the suite
pub fn register(map: &mut HashMap<&'static str, SuiteFn>) {
    insert(map, "aes_ctr", suite);
}

/// CTR fixtures for AES-128 and AES-256
pub fn suite() -> Suite {
    Suite {
        name: "aes_ctr",
        title: "AES-CTR core",
        reference: "NIST SP 800-38A F.5.1, F.5.5",
        cases: vec![
            nist_ctr(
                "nist_ctr_128",
                "Test inputs (128 bit)",
                FieldValue::hex_right(AES128_KEY),
                0,
                &CTR_128_CIPHERTEXTS,
            )
            .names("nist_ctr_128_enc_in{i}", "nist_ctr_128_enc_expected{i}"),
            nist_ctr(
                "nist_ctr_256",
                "Test inputs (256 bit)",
                FieldValue::hex(AES256_KEY),
                1,
                &CTR_256_CIPHERTEXTS,
            )
            .names("nist_ctr_256_enc_in{i}", "nist_ctr_256_enc_expected{i}"),
        ],
    }
}

// Every block carries its own counter block
fn nist_ctr(
    name: &'static str,
    title: &'static str,
    key: FieldValue,
    keylen: u64,
    ciphertexts: &[&'static str; 4],
) -> TestCase {
    let case = TestCase::new(name, title, &AES_CTR_ONLY)
        .constant("key", key)
        .constant("keylen", Uint(keylen));

    COUNTERS
        .into_iter()
        .zip(PLAINTEXTS)
        .zip(ciphertexts.iter().copied())
        .fold(case, |case, ((counter, plaintext), ciphertext)| {
            case.block(
                Block::new([
                    ("counter", FieldValue::hex(counter)),
                    ("block", FieldValue::hex(plaintext)),
                ])
                .with_expected(ciphertext),
            )
        })
}
