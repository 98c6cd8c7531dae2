//! End-to-end checks of the fixture suites against published vectors

use tbvec_algorithms::{FieldValue, Layout, WordSerializer};
use tbvec_api::Error;
use tbvec_fixtures::{all_suites, suite, ArrayKind, EmitConfig, Runner};
use tbvec_params::{FieldSpec, AES_CTR_ONLY, CMAC_BLOCK, INTERFACE_BITS};
use tbvec_tests::parse_declarations;

const ZUC256_GOLDEN: &str = include_str!("../golden/zuc256_testvector.c");

// Arrays produced by each interface's own fixture generator
const GENERATED: [(&str, &str); 5] = [
    ("aes_tot", include_str!("../golden/aes_tot_testvector.h")),
    ("cmac", include_str!("../golden/cmac_testvector.h")),
    ("aes_ctr", include_str!("../golden/aes_ctr_testvector.h")),
    ("snow_v", include_str!("../golden/snow_v_testvector.h")),
    ("zuc256", ZUC256_GOLDEN),
];

/// Check every generated array of `name` against the built suite
fn assert_matches_generator(name: &str, golden: &str) {
    let s = suite(name).unwrap();
    let cases = Runner::build_suite(&s).unwrap_or_else(|e| panic!("{e}"));
    let declarations = parse_declarations(golden);
    assert!(!declarations.is_empty(), "{name}: no declarations in golden file");

    for (array, words) in &declarations {
        let built = cases
            .iter()
            .find_map(|c| c.array(array))
            .unwrap_or_else(|| panic!("{name}: no array '{array}'"));
        assert_eq!(&built.words, words, "{name}: array '{array}'");
    }
}

#[test]
fn every_suite_builds() {
    for s in all_suites() {
        let cases = Runner::build_suite(&s).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(cases.len(), s.cases.len(), "suite {}", s.name);
        for case in &cases {
            for array in &case.arrays {
                match array.kind {
                    ArrayKind::Init | ArrayKind::Block => {
                        assert_eq!(array.words.len(), 32, "{}/{}", case.name, array.name)
                    }
                    ArrayKind::Expected => assert!(!array.words.is_empty()),
                }
            }
        }
    }
}

#[test]
fn aes_tot_matches_generator() {
    assert_matches_generator("aes_tot", GENERATED[0].1);
}

#[test]
fn cmac_matches_generator() {
    assert_matches_generator("cmac", GENERATED[1].1);
}

#[test]
fn aes_ctr_matches_generator() {
    assert_matches_generator("aes_ctr", GENERATED[2].1);
}

#[test]
fn snow_v_matches_generator() {
    assert_matches_generator("snow_v", GENERATED[3].1);
}

#[test]
fn generated_arrays_cover_every_suite() {
    let mut total = 0;
    for (name, golden) in GENERATED {
        assert!(suite(name).is_some());
        total += parse_declarations(golden).len();
    }
    assert_eq!(total, 51);
}

#[test]
fn snow_v_init_and_short_block() {
    let s = suite("snow_v").unwrap();
    let cases = Runner::build_suite(&s).unwrap();
    let tc6 = &cases[1];

    // init pack: block and adj_len zeroed, 15-byte AD zero-filled on the left
    let init = tc6.array("tc6_init").unwrap();
    assert_eq!(init.words[0], 0x00000108);
    assert!(init.words[2..6].iter().all(|w| *w == 0));
    assert_eq!(init.words[8], 0x20444141);
    assert_eq!(init.words[11], 0x00216575);
    assert_eq!(init.words[24], 0x00000002);

    // final block: one payload byte, adj_len set
    let last = tc6.array("tc6_block2").unwrap();
    assert_eq!(last.words[2], 0x00000021);
    assert_eq!(last.words[24], 0x00000003);
}

#[test]
fn ctr_only_register() {
    let layout = Layout::from_spec(&AES_CTR_ONLY).unwrap();
    assert_eq!(layout.padding_bits(), 511);

    let counter = FieldValue::hex("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff");
    let key = FieldValue::hex_right("2b7e151628aed2a6abf7158809cf4f3c");
    let keylen = FieldValue::Uint(0);
    let block = FieldValue::hex("6bc1bee22e409f96e93d7e117393172a");
    let bits = layout
        .pack([
            ("counter", &counter),
            ("key", &key),
            ("keylen", &keylen),
            ("block", &block),
        ])
        .unwrap();
    assert_eq!(bits.len_bits(), INTERFACE_BITS);
    assert_eq!(bits.leading_zeros(), 511);

    let words = WordSerializer::to_words(&bits).unwrap();
    assert_eq!(words.len(), 32);
    assert_eq!(words[0], 0x7393172a);
    assert_eq!(words[3], 0x6bc1bee2);
    // the counter's top bit lands at bit 512
    assert_eq!(words[16], 0x00000001);
    assert!(words[17..].iter().all(|w| *w == 0));
}

#[test]
fn cmac_final_block_register() {
    let layout = Layout::from_spec(&CMAC_BLOCK).unwrap();
    let finalize = FieldValue::Uint(1);
    let final_size = FieldValue::Uint(0x40);
    let block = FieldValue::hex_right("30c81c46a35ce411");
    let words = WordSerializer::to_words(
        &layout
            .pack([("finalize", &finalize), ("final_size", &final_size), ("block", &block)])
            .unwrap(),
    )
    .unwrap();
    assert_eq!(words[0], 0x00000000);
    assert_eq!(words[2], 0xa35ce411);
    assert_eq!(words[3], 0x30c81c46);
    assert_eq!(words[4], 0x00000140);
}

#[test]
fn raw_expected_output() {
    let words = WordSerializer::to_words_raw("tag", "0123456789abcdef0123456789abcdef").unwrap();
    assert_eq!(words, [0x89abcdef, 0x01234567, 0x89abcdef, 0x01234567]);
}

#[test]
fn overflow_errors() {
    let err = tbvec_algorithms::Field::new("len", 8, 256u32).unwrap_err();
    assert!(matches!(err, Error::FieldOverflow { width_bits: 8, needed_bits: 9, .. }));

    const WIDE: &[FieldSpec] = &[FieldSpec::new("a", 1000), FieldSpec::new("b", 25)];
    let err = Layout::new("wide", WIDE, 1024).unwrap_err();
    assert!(matches!(err, Error::LayoutOverflow { used_bits: 1025, total_bits: 1024, .. }));
}

#[test]
fn zuc256_matches_testbench_source() {
    let config = EmitConfig::testvector_c("zuc256");
    let runner = Runner::new(&config).unwrap();
    let mut out = Vec::new();
    let report = runner.run(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), ZUC256_GOLDEN);
    assert_eq!(report.suites, 1);
    assert_eq!(report.cases, 2);
    // 4 blocks + 4 scalar words, 2 blocks + a 4-word tag
    assert_eq!(report.arrays, 11);
    assert_eq!(report.words, 4 * 32 + 4 + 2 * 32 + 4);
}

#[test]
fn aes_tot_partial_block() {
    let s = suite("aes_tot").unwrap();
    let cases = Runner::build_suite(&s).unwrap();
    let ctr = &cases[0];
    let expected = ctr.array("ctr1_expected").unwrap();
    assert_eq!(expected.words, [0xcacaf5c5, 0xca84e990, 0x00000000, 0x00000000]);
}

#[test]
fn listing_covers_all_suites() {
    let config = EmitConfig::listing();
    let mut out = Vec::new();
    let report = Runner::new(&config).unwrap().run(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    for s in all_suites() {
        assert!(text.contains(&format!("// ==== {}: {} ====", s.name, s.title)));
    }
    assert_eq!(report.suites, 5);
    assert_eq!(text.matches("uint32_t ").count(), report.arrays);
}
