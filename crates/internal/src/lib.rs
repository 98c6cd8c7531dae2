//! Internal helpers shared by the tbvec crates
//!
//! Not a public API: literal parsing and word byte-order helpers used by
//! the packer and the serializer.

pub mod endian;
pub mod hex;

pub use endian::words_from_be_bytes;
pub use hex::{decode_literal, literal_to_biguint};
