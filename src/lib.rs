//! Conformance harness for an external script engine.
//!
//! Finds test-case files under a root, runs each one through the engine
//! executable, and compares the engine's stdout with the sibling `.expect`
//! file after trimming surrounding whitespace.

pub mod cli;
pub mod compare;
pub mod discovery;
pub mod errors;
pub mod expectation;
pub mod harness;
pub mod report;
pub mod runner;

pub use crate::discovery::{FixtureLocator, TestCase};
pub use crate::errors::{ExecutionFailure, HarnessError, MissingExpectation};
pub use crate::harness::{run_suite, HarnessConfig};
pub use crate::report::{CaseOutcome, ReportSink, RunSummary};
