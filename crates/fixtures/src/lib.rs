//! Testbench fixture generation
//!
//! Published cipher test vectors, described as [`model::TestCase`]s over the
//! register layouts of `tbvec-params`, are packed by [`builder::VectorBuilder`]
//! into word arrays and rendered as C declarations by [`emit::Emitter`]. The
//! [`runner::Runner`] drives every registered suite into one output stream.

pub mod builder;
pub mod config;
pub mod emit;
pub mod model;
pub mod runner;
pub mod suites;

pub use builder::{ArrayKind, BuiltCase, VectorBuilder, WordArray};
pub use config::EmitConfig;
pub use emit::Emitter;
pub use model::{Block, Expected, InitPack, Suite, TestCase};
pub use runner::{Report, Runner};
pub use suites::{all_suites, suite, SUITE_ORDER};
