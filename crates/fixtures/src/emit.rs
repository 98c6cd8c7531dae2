//! Renders built cases as C word-array declarations

use std::fmt::Write as _;

use tbvec_api::{Word, WORD_HEX_DIGITS};

use crate::builder::{ArrayKind, BuiltCase, WordArray};
use crate::config::EmitConfig;
use crate::model::Suite;

/// Textual rendering of fixture arrays
#[derive(Debug, Clone)]
pub struct Emitter<'c> {
    config: &'c EmitConfig,
}

impl<'c> Emitter<'c> {
    /// Emitter using `config`
    pub fn new(config: &'c EmitConfig) -> Self {
        Self { config }
    }

    /// `0x`-prefixed, lowercase, eight digits
    pub fn word_literal(word: Word) -> String {
        format!("0x{:0width$x}", word, width = WORD_HEX_DIGITS)
    }

    /// One declaration line, without trailing newline
    pub fn declaration(&self, array: &WordArray) -> String {
        let ty = &self.config.word_type;
        if array.kind == ArrayKind::Expected && array.words.len() == 1 && self.config.scalar_single_word {
            return format!("{} {} = {};", ty, array.name, Self::word_literal(array.words[0]));
        }
        let words: Vec<String> = array.words.iter().map(|w| Self::word_literal(*w)).collect();
        format!(
            "{} {}[{}] = {{ {} }};",
            ty,
            array.name,
            array.words.len(),
            words.join(", ")
        )
    }

    /// Stream preamble, empty unless enabled
    pub fn preamble(&self) -> String {
        if self.config.preamble {
            "#include <stdint.h>\n\n".to_string()
        } else {
            String::new()
        }
    }

    /// Title comment and declarations of one case
    pub fn render_case(&self, case: &BuiltCase) -> String {
        let mut out = String::new();
        if self.config.titles {
            let _ = writeln!(out, "// {}", case.title);
        }
        for array in &case.arrays {
            let _ = writeln!(out, "{}", self.declaration(array));
        }
        if self.config.blank_between_cases {
            out.push('\n');
        }
        out
    }

    /// Banner and every case of one suite
    pub fn render_suite(&self, suite: &Suite, cases: &[BuiltCase]) -> String {
        let mut out = String::new();
        if self.config.banner {
            let _ = writeln!(out, "// ==== {}: {} ====", suite.name, suite.title);
            let _ = writeln!(out, "// Test vectors: {}", suite.reference);
        }
        for case in cases {
            out.push_str(&self.render_case(case));
        }
        out
    }
}
