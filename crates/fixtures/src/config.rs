//! Emission settings
//!
//! Only the textual rendering is configurable; the word values of every
//! array are fixed by the layouts and the fixture data.

use serde::Deserialize;
use tbvec_api::{Error, Result};

/// How fixture arrays are rendered
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitConfig {
    /// C type of one word
    pub word_type: String,
    /// Declare a one-word expected value as a scalar instead of an array
    pub scalar_single_word: bool,
    /// Emit a suite banner naming the vector source
    pub banner: bool,
    /// Emit case title comments
    pub titles: bool,
    /// Emit a `#include <stdint.h>` preamble
    pub preamble: bool,
    /// Separate cases with an empty line
    pub blank_between_cases: bool,
    /// Suites to emit, by registry name; empty means all
    pub suites: Vec<String>,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            word_type: "uint32_t".to_string(),
            scalar_single_word: true,
            banner: true,
            titles: true,
            preamble: false,
            blank_between_cases: true,
            suites: Vec::new(),
        }
    }
}

// Builder methods for easy customization
impl EmitConfig {
    pub fn with_word_type(mut self, word_type: impl Into<String>) -> Self {
        self.word_type = word_type.into();
        self
    }

    pub fn with_scalar_single_word(mut self, scalar: bool) -> Self {
        self.scalar_single_word = scalar;
        self
    }

    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    pub fn with_titles(mut self, titles: bool) -> Self {
        self.titles = titles;
        self
    }

    pub fn with_preamble(mut self, preamble: bool) -> Self {
        self.preamble = preamble;
        self
    }

    pub fn with_blank_between_cases(mut self, blank: bool) -> Self {
        self.blank_between_cases = blank;
        self
    }

    pub fn with_suites<I, S>(mut self, suites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suites = suites.into_iter().map(Into::into).collect();
        self
    }

    /// Parse settings from a TOML document; absent keys keep their defaults
    pub fn from_toml_str(doc: &str) -> Result<Self> {
        toml::from_str(doc).map_err(|e| Error::Config(e.to_string()))
    }

    /// Whether a suite passes the filter
    pub fn selects(&self, suite: &str) -> bool {
        self.suites.is_empty() || self.suites.iter().any(|s| s == suite)
    }
}

// Predefined configurations
impl EmitConfig {
    /// Listing of every suite on one stream
    pub fn listing() -> Self {
        Self::default()
    }

    /// A self-contained C translation unit for one interface, laid out like
    /// the testbench's own `testvector.c`
    pub fn testvector_c(suite: &str) -> Self {
        Self::default()
            .with_preamble(true)
            .with_banner(false)
            .with_blank_between_cases(false)
            .with_suites([suite])
    }
}
