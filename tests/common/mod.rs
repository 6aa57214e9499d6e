//! Shared fixtures for the integration tests.
//!
//! Suites are built in a temporary directory. `cat` serves as the engine: it
//! prints the test-case file, so a fixture's content is its "output".
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use expect_runner::{CaseOutcome, ReportSink, RunSummary, TestCase};
use tempfile::TempDir;

pub const ECHO_ENGINE: &str = "cat";

/// A temporary fixture tree.
pub struct Suite {
    pub dir: TempDir,
}

impl Suite {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    /// Adds `rel` with `output` as content and `rel.expect` with `expected`.
    pub fn case(&self, rel: &str, output: &str, expected: &str) -> &Self {
        self.file(rel, output)
            .file(&format!("{rel}.expect"), expected)
    }
}

/// Captures what the harness reports instead of printing it.
#[derive(Default)]
pub struct RecordingSink {
    pub cases: Vec<(String, &'static str)>,
    pub summaries: Vec<RunSummary>,
}

impl RecordingSink {
    pub fn labels(&self) -> Vec<(&str, &str)> {
        self.cases.iter().map(|(n, l)| (n.as_str(), *l)).collect()
    }
}

impl ReportSink for RecordingSink {
    fn report_case(&mut self, case: &TestCase, outcome: &CaseOutcome) {
        self.cases.push((case.name(), outcome.label()));
    }

    fn report_summary(&mut self, summary: &RunSummary) {
        self.summaries.push(summary.clone());
    }
}
