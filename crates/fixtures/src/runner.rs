//! Drives the registered suites into one output stream

use std::io::Write;

use tbvec_api::{Error, Result, ResultExt};
use tracing::info;

use crate::builder::{BuiltCase, VectorBuilder};
use crate::config::EmitConfig;
use crate::emit::Emitter;
use crate::model::Suite;
use crate::suites::{suite, SUITE_ORDER};

/// Totals of one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// Suites written
    pub suites: usize,
    /// Cases written
    pub cases: usize,
    /// Arrays declared
    pub arrays: usize,
    /// Words declared
    pub words: usize,
}

/// Generates fixtures for a set of suites.
///
/// Each suite is packed and rendered completely before any of it is
/// written, so a failing case never leaves a partial suite in the stream.
#[derive(Debug)]
pub struct Runner<'c> {
    config: &'c EmitConfig,
    suites: Vec<Suite>,
}

impl<'c> Runner<'c> {
    /// Runner over the registered suites selected by `config`
    pub fn new(config: &'c EmitConfig) -> Result<Self> {
        if let Some(unknown) = config
            .suites
            .iter()
            .find(|name| !SUITE_ORDER.contains(&name.as_str()))
        {
            return Err(Error::Config(format!("unknown suite '{}'", unknown)));
        }
        let suites = SUITE_ORDER
            .iter()
            .filter(|name| config.selects(name))
            .filter_map(|name| suite(name))
            .collect();
        Ok(Self { config, suites })
    }

    /// Runner over caller-supplied suites, ignoring the configured filter
    pub fn with_suites(config: &'c EmitConfig, suites: Vec<Suite>) -> Self {
        Self { config, suites }
    }

    /// Suites this runner will emit, in order
    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    /// Pack every case of a suite, locating any failure by suite and case
    pub fn build_suite(suite: &Suite) -> Result<Vec<BuiltCase>> {
        suite
            .cases
            .iter()
            .map(|case| {
                VectorBuilder::new(case)
                    .and_then(|builder| builder.build())
                    .in_case(suite.name, case.name)
            })
            .collect()
    }

    /// Write every suite to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Report> {
        let emitter = Emitter::new(self.config);
        let mut report = Report::default();

        out.write_all(emitter.preamble().as_bytes())?;
        for suite in &self.suites {
            let cases = Self::build_suite(suite)?;
            let text = emitter.render_suite(suite, &cases);
            out.write_all(text.as_bytes())?;

            let arrays: usize = cases.iter().map(|c| c.arrays.len()).sum();
            let words: usize = cases.iter().map(BuiltCase::word_count).sum();
            info!(suite = suite.name, cases = cases.len(), arrays, words, "suite written");

            report.suites += 1;
            report.cases += cases.len();
            report.arrays += arrays;
            report.words += words;
        }
        out.flush()?;

        info!(
            suites = report.suites,
            cases = report.cases,
            arrays = report.arrays,
            words = report.words,
            "fixtures generated"
        );
        Ok(report)
    }
}
