//! Error handling traits for fixture generation

use super::types::{Error, Result};
use std::borrow::Cow;

/// Extension trait for Result types
pub trait ResultExt<T>: Sized {
    /// Locate an error in a fixture suite and case
    fn in_case<S, C>(self, suite: S, case: C) -> Result<T>
    where
        S: Into<Cow<'static, str>>,
        C: Into<Cow<'static, str>>;

    /// Name the literal or width an error refers to
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: Into<Cow<'static, str>>;
}

impl<T, E: Into<Error>> ResultExt<T> for core::result::Result<T, E> {
    fn in_case<S, C>(self, suite: S, case: C) -> Result<T>
    where
        S: Into<Cow<'static, str>>,
        C: Into<Cow<'static, str>>,
    {
        self.map_err(|e| e.into().in_case(suite, case))
    }

    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: Into<Cow<'static, str>>,
    {
        self.map_err(|e| e.into().with_context(context))
    }
}
