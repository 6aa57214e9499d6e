//! The run pipeline: discover, then for each case load the expectation,
//! execute, compare, and report.
//!
//! Cases are processed strictly one at a time. Only discovery can fail the
//! run as a whole; everything after it becomes a [`CaseOutcome`].

use std::path::PathBuf;

use tracing::{info, warn};

use crate::compare::{compare, Comparison};
use crate::discovery::{FixtureLocator, TestCase, DEFAULT_EXTENSION};
use crate::errors::Result;
use crate::expectation::load_expected;
use crate::report::{CaseOutcome, ReportSink, RunSummary};
use crate::runner::SubprocessRunner;

/// Engine path used when none is given, relative to the working directory.
pub const DEFAULT_EXECUTABLE: &str = "../../build/js/js";

/// Configuration for one harness run.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub root: PathBuf,
    pub executable: PathBuf,
    /// Test-case extension without the leading dot.
    pub extension: String,
    /// Only cases whose name contains this substring are evaluated.
    pub filter: Option<String>,
    /// Emit the summary block after the last case.
    pub summary: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            extension: DEFAULT_EXTENSION.to_string(),
            filter: None,
            summary: true,
        }
    }
}

impl HarnessConfig {
    fn selects(&self, case: &TestCase) -> bool {
        self.filter
            .as_deref()
            .map_or(true, |f| case.name().contains(f))
    }
}

/// Decides the outcome of a single case.
pub fn evaluate_case(runner: &SubprocessRunner, case: &TestCase) -> CaseOutcome {
    let expected = match load_expected(case) {
        Ok(expected) => expected,
        Err(err) => {
            warn!(case = %case.name(), error = %err, "no expectation file");
            return CaseOutcome::MissingExpectation(err);
        }
    };

    let actual = match runner.run(case).output {
        Ok(actual) => actual,
        Err(failure) => return CaseOutcome::ExecutionError(failure),
    };

    if compare(&actual, &expected) {
        CaseOutcome::Pass
    } else {
        CaseOutcome::Mismatch(Comparison::new(&actual, &expected))
    }
}

/// Runs every selected case under `config.root`, streaming results to `sink`.
///
/// Returns the summary whether or not it was reported. A discovery failure is
/// returned before anything is sent to the sink.
pub fn run_suite<S: ReportSink>(config: &HarnessConfig, mut sink: S) -> Result<RunSummary> {
    let cases = FixtureLocator::new(&config.extension).discover(&config.root)?;
    let runner = SubprocessRunner::new(&config.executable);

    let mut summary = RunSummary::default();
    for case in cases.iter().filter(|c| config.selects(c)) {
        let outcome = evaluate_case(&runner, case);
        sink.report_case(case, &outcome);
        summary.record(case, &outcome);
    }

    info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed(),
        "run finished"
    );

    if config.summary {
        sink.report_summary(&summary);
    }
    Ok(summary)
}
