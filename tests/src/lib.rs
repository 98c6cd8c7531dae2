//! Shared helpers for the tbvec integration tests and benchmarks

use num_bigint::BigUint;
use proptest::prelude::*;
use tbvec_algorithms::{Field, WordSerializer};
use tbvec_api::Word;

/// Widths of a random layout: one to six fields of 1..=160 bits, so the
/// total always fits a 1024-bit interface
pub fn field_widths() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..=160, 1..=6)
}

/// A value that fits in `width_bits`
pub fn value_for_width(width_bits: u32) -> impl Strategy<Value = BigUint> {
    let bytes = width_bits.div_ceil(8) as usize;
    prop::collection::vec(any::<u8>(), bytes).prop_map(move |b| {
        let v = BigUint::from_bytes_be(&b);
        // Drop the excess bits of the top byte
        let mask = (BigUint::from(1u8) << width_bits) - 1u8;
        v & mask
    })
}

/// Random fields `f0, f1, ...` with values fitting their widths
pub fn random_fields() -> impl Strategy<Value = Vec<Field>> {
    field_widths().prop_flat_map(|widths| {
        widths
            .into_iter()
            .enumerate()
            .map(|(i, w)| {
                value_for_width(w).prop_map(move |v| {
                    Field::new(format!("f{i}"), w, v).expect("value fits by construction")
                })
            })
            .collect::<Vec<_>>()
    })
}

/// Hex string of `words` 32-bit groups
pub fn hex_words() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u32>(), 1..=16)
        .prop_map(|ws| ws.iter().map(|w| format!("{w:08x}")).collect())
}

/// Reassemble packed words and cut out each field, most-significant field first
pub fn unpack(words: &[Word], widths: &[u32]) -> Vec<BigUint> {
    let mut value = WordSerializer::from_words(words);
    let mut fields = Vec::with_capacity(widths.len());
    for &w in widths.iter().rev() {
        let mask = (BigUint::from(1u8) << w) - 1u8;
        fields.push(&value & &mask);
        value >>= w;
    }
    fields.reverse();
    fields
}

/// Word arrays declared in a C fixture file, by name.
///
/// Reads both `uint32_t name[n] = { 0x.., .. };` and the scalar form
/// `uint32_t name = 0x..;`; every other line is ignored.
pub fn parse_declarations(source: &str) -> Vec<(String, Vec<Word>)> {
    source
        .lines()
        .filter_map(|line| line.trim().strip_prefix("uint32_t "))
        .map(|decl| {
            let (lhs, rhs) = decl.split_once('=').expect("declaration has an initializer");
            let name = lhs.split('[').next().unwrap_or(lhs).trim().to_string();
            let body = rhs
                .trim()
                .trim_end_matches(';')
                .trim_start_matches('{')
                .trim_end_matches('}');
            let words = body
                .split(',')
                .map(|w| {
                    let digits = w.trim().trim_start_matches("0x");
                    Word::from_str_radix(digits, 16).expect("hex word literal")
                })
                .collect();
            (name, words)
        })
        .collect()
}
