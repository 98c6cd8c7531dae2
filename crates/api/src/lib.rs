//! Shared API surface for the tbvec workspace
//!
//! This crate provides the error type used by every other crate, the small
//! validation helpers built on it, and the handful of types (words, padding
//! direction) that more than one crate needs to agree on.

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result, ResultExt};
pub use types::*;
