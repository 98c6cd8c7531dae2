//! Property-based tests for bit-field packing and word serialization

use num_bigint::BigUint;
use proptest::prelude::*;
use tbvec_algorithms::{BitFieldPacker, WordSerializer};
use tbvec_api::{Error, WORD_BITS};
use tbvec_tests::{hex_words, random_fields, unpack};

const TOTAL_BITS: u32 = 1024;

proptest! {
    #[test]
    fn packed_fields_reassemble(fields in random_fields()) {
        let bits = BitFieldPacker::pack(&fields, TOTAL_BITS).unwrap();
        let words = WordSerializer::to_words(&bits).unwrap();

        let widths: Vec<u32> = fields.iter().map(|f| f.width_bits()).collect();
        let recovered = unpack(&words, &widths);
        for (field, value) in fields.iter().zip(recovered) {
            prop_assert_eq!(field.value(), &value, "field {}", field.name());
        }
    }

    #[test]
    fn packed_vector_is_whole_words(fields in random_fields()) {
        let bits = BitFieldPacker::pack(&fields, TOTAL_BITS).unwrap();
        let words = WordSerializer::to_words(&bits).unwrap();
        prop_assert_eq!(words.len(), (TOTAL_BITS / WORD_BITS) as usize);
    }

    #[test]
    fn padding_stays_zero(fields in random_fields()) {
        let used: u64 = fields.iter().map(|f| u64::from(f.width_bits())).sum();
        let bits = BitFieldPacker::pack(&fields, TOTAL_BITS).unwrap();
        prop_assert!(bits.value().bits() <= used);
        prop_assert!(bits.leading_zeros() >= u64::from(TOTAL_BITS) - used);
    }

    #[test]
    fn raw_words_group_from_the_right(hex in hex_words()) {
        let words = WordSerializer::to_words_raw("expected", &hex).unwrap();
        prop_assert_eq!(words.len(), hex.len() / 8);
        prop_assert_eq!(format!("{:08x}", words[0]), &hex[hex.len() - 8..]);

        let value = BigUint::parse_bytes(hex.as_bytes(), 16).unwrap();
        prop_assert_eq!(WordSerializer::from_words(&words), value);
    }

    #[test]
    fn raw_rejects_partial_words(hex in hex_words(), extra in 1usize..8) {
        let ragged = format!("{}{}", hex, "0".repeat(extra));
        let err = WordSerializer::to_words_raw("expected", &ragged).unwrap_err();
        prop_assert!(matches!(err, Error::Format { .. }), "unexpected error: {}", err);
    }
}
