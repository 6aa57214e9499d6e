//! Console rendering of case results and the run summary.
//!
//! Colors are applied through `termcolor`, so the same reporter writes plain
//! text into a `termcolor::Buffer` in tests.

use std::io;

use difference::Difference;
use termcolor::{Color, ColorSpec, WriteColor};
use tracing::warn;

use crate::compare::Comparison;
use crate::discovery::TestCase;
use crate::report::{CaseOutcome, ReportSink, RunSummary};

/// Writes a line per case and the failure summary to a color-capable stream.
pub struct ConsoleReporter<W: WriteColor> {
    out: W,
}

impl<W: WriteColor> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(self.out, "{text}")?;
        self.out.reset()
    }

    fn write_case(&mut self, case: &TestCase, outcome: &CaseOutcome) -> io::Result<()> {
        write!(self.out, "{} - ", case.name())?;
        let color = if outcome.passed() { Color::Green } else { Color::Red };
        self.colored(outcome.label(), color)?;
        writeln!(self.out)?;

        match outcome {
            CaseOutcome::Pass => {}
            CaseOutcome::Mismatch(comparison) => self.write_mismatch(comparison)?,
            CaseOutcome::MissingExpectation(err) => writeln!(self.out, "  {err}")?,
            CaseOutcome::ExecutionError(failure) => writeln!(self.out, "  {failure}")?,
        }
        self.out.flush()
    }

    fn write_mismatch(&mut self, comparison: &Comparison) -> io::Result<()> {
        writeln!(self.out, "expect:")?;
        writeln!(self.out, "{}\n", comparison.expected)?;
        writeln!(self.out, "got:")?;
        writeln!(self.out, "{}", comparison.actual)?;
        writeln!(self.out, "diff:")?;
        for diff in comparison.line_diff() {
            match diff {
                Difference::Same(ref x) => {
                    for line in x.lines() {
                        writeln!(self.out, " {line}")?;
                    }
                }
                Difference::Rem(ref x) => {
                    for line in x.lines() {
                        self.colored(&format!("-{line}"), Color::Red)?;
                        writeln!(self.out)?;
                    }
                }
                Difference::Add(ref x) => {
                    for line in x.lines() {
                        self.colored(&format!("+{line}"), Color::Green)?;
                        writeln!(self.out)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn write_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{} passed, {} failed, {} total",
            summary.passed,
            summary.failed(),
            summary.total
        )?;
        if summary.has_failures() {
            writeln!(self.out, "Failed Tests:")?;
            for name in &summary.failed_cases {
                writeln!(self.out, "{name}")?;
            }
        } else {
            self.colored("All tests passed", Color::Green)?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

impl<W: WriteColor> ReportSink for ConsoleReporter<W> {
    fn report_case(&mut self, case: &TestCase, outcome: &CaseOutcome) {
        if let Err(e) = self.write_case(case, outcome) {
            warn!(case = %case.name(), error = %e, "failed to write report line");
        }
    }

    fn report_summary(&mut self, summary: &RunSummary) {
        if let Err(e) = self.write_summary(summary) {
            warn!(error = %e, "failed to write summary");
        }
    }
}
