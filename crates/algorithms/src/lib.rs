//! Bit-field packing and word serialization
//!
//! The codec behind every testbench fixture: fields of different widths are
//! packed into one zero-padded register ([`BitFieldPacker`]), and registers or
//! raw hex values are split into 32-bit words, least-significant word first
//! ([`WordSerializer`]). A [`Layout`] is a validated register schema.
//!
//! ```
//! use tbvec_algorithms::{FieldValue, Layout, WordSerializer};
//! use tbvec_params::CMAC_BLOCK;
//!
//! let layout = Layout::from_spec(&CMAC_BLOCK).unwrap();
//! let finalize = FieldValue::Uint(1);
//! let size = FieldValue::Uint(0x40);
//! let block = FieldValue::hex_right("30c81c46a35ce411");
//! let bits = layout
//!     .pack([("finalize", &finalize), ("final_size", &size), ("block", &block)])
//!     .unwrap();
//! let words = WordSerializer::to_words(&bits).unwrap();
//! assert_eq!(words.len(), 32);
//! assert_eq!(words[0], 0x0000_0000);
//! assert_eq!(words[3], 0x30c8_1c46);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod bitvec;
pub mod field;
pub mod layout;
pub mod pack;
pub mod serialize;

pub use bitvec::BitVector;
pub use field::{Field, FieldValue};
pub use layout::Layout;
pub use pack::BitFieldPacker;
pub use serialize::WordSerializer;

// Re-export the shared error handling
pub use tbvec_api::{Error, Pad, Result, Word};
