//! Per-case verdicts, the run summary, and the sink they are reported to.

use crate::compare::Comparison;
use crate::discovery::TestCase;
use crate::errors::{ExecutionFailure, MissingExpectation};

/// Verdict for a single test case.
#[derive(Debug)]
pub enum CaseOutcome {
    Pass,
    /// Output was captured but differs from the expectation after trimming.
    Mismatch(Comparison),
    /// The `.expect` file could not be read.
    MissingExpectation(MissingExpectation),
    /// The target could not be run or its output could not be captured.
    ExecutionError(ExecutionFailure),
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, CaseOutcome::Pass)
    }

    /// Short label printed next to the case name.
    pub fn label(&self) -> &'static str {
        match self {
            CaseOutcome::Pass => "PASS",
            CaseOutcome::Mismatch(_) => "FAIL",
            CaseOutcome::MissingExpectation(_) => "MISSING EXPECTATION",
            CaseOutcome::ExecutionError(_) => "EXECUTION ERROR",
        }
    }
}

/// Aggregate over every case in a run, in discovery order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed_cases: Vec<String>,
}

impl RunSummary {
    pub fn record(&mut self, case: &TestCase, outcome: &CaseOutcome) {
        self.total += 1;
        if outcome.passed() {
            self.passed += 1;
        } else {
            self.failed_cases.push(case.name());
        }
    }

    pub fn failed(&self) -> usize {
        self.failed_cases.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed_cases.is_empty()
    }
}

/// Where results go. The console reporter lives in [`crate::cli::output`];
/// tests record outcomes instead.
pub trait ReportSink {
    /// Called once per case, in discovery order, as soon as it is decided.
    fn report_case(&mut self, case: &TestCase, outcome: &CaseOutcome);

    /// Called once after every case has been reported.
    fn report_summary(&mut self, summary: &RunSummary);
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn report_case(&mut self, case: &TestCase, outcome: &CaseOutcome) {
        (**self).report_case(case, outcome)
    }

    fn report_summary(&mut self, summary: &RunSummary) {
        (**self).report_summary(summary)
    }
}
