//! Error types for the harness.
//!
//! [`HarnessError`] is fatal. [`MissingExpectation`] and [`ExecutionFailure`]
//! are caught at the case level and turned into a failed report entry, so one
//! broken fixture never stops the rest of the run.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Why the target executable produced no comparable output.
#[derive(Error, Diagnostic, Debug)]
pub enum ExecutionFailure {
    #[error("could not launch '{}': {source}", .executable.display())]
    #[diagnostic(
        code(expect_runner::execution::launch),
        help("check that --executable points at a built engine binary")
    )]
    Launch {
        executable: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to capture output of '{}': {source}", .executable.display())]
    #[diagnostic(code(expect_runner::execution::capture))]
    Capture {
        executable: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("stdout is not valid UTF-8 (invalid byte at offset {valid_up_to})")]
    #[diagnostic(code(expect_runner::execution::decode))]
    Decode { valid_up_to: usize },
}

/// Fatal errors that stop the run before any case is evaluated.
#[derive(Error, Diagnostic, Debug)]
pub enum HarnessError {
    #[error("cannot scan test root '{}': {reason}", .root.display())]
    #[diagnostic(
        code(expect_runner::discovery),
        help("pass an existing, readable directory as the test root")
    )]
    Discovery { root: PathBuf, reason: String },
}

/// A test case whose `.expect` file could not be read.
#[derive(Error, Diagnostic, Debug)]
#[error("missing expectation file '{}': {source}", .path.display())]
#[diagnostic(
    code(expect_runner::missing_expectation),
    help("every test case needs a sibling file named <case>.expect")
)]
pub struct MissingExpectation {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

pub type Result<T, E = HarnessError> = std::result::Result<T, E>;
