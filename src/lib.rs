//! # tbvec
//!
//! Packs published cipher test vectors into the 32-bit word arrays loaded by
//! hardware testbench interfaces.
//!
//! ## Usage
//!
//! ```no_run
//! use tbvec::prelude::*;
//!
//! let config = EmitConfig::default();
//! let report = Runner::new(&config)?.run(&mut std::io::stdout())?;
//! assert_eq!(report.suites, 5);
//! # Ok::<(), tbvec::api::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`tbvec-api`]: Error type, word constants and validation
//! - [`tbvec-internal`]: Hex literal and byte/word helpers
//! - [`tbvec-params`]: Register layouts of the testbench interfaces
//! - [`tbvec-algorithms`]: Bit-field packing and word serialization
//! - [`tbvec-fixtures`]: Test-vector suites, builder, emitter and runner

// Core re-exports
pub use tbvec_algorithms as algorithms;
pub use tbvec_api as api;
pub use tbvec_fixtures as fixtures;
pub use tbvec_internal as internal;
pub use tbvec_params as params;

pub mod logging;

/// Common imports for tbvec users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Pad, Result, ResultExt, Word};

    // Packing core
    pub use crate::algorithms::{BitFieldPacker, BitVector, Field, FieldValue, Layout, WordSerializer};

    // Register layouts
    pub use crate::params::{profile, FieldSpec, ProfileSpec, ALL_PROFILES, INTERFACE_BITS};

    // Fixture generation
    pub use crate::fixtures::{
        all_suites, suite, BuiltCase, EmitConfig, Emitter, Report, Runner, Suite, TestCase,
        VectorBuilder, WordArray,
    };
}
