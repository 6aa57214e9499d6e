//! Runs the target executable against one test case.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, warn};

use crate::discovery::TestCase;
use crate::errors::ExecutionFailure;

/// Outcome of one subprocess invocation.
#[derive(Debug)]
pub struct ExecutionResult {
    /// Decoded stdout, or why there is none.
    pub output: Result<String, ExecutionFailure>,
    /// Exit status of the child, when it ran at all. Not used for pass/fail.
    pub status: Option<ExitStatus>,
}

impl ExecutionResult {
    pub fn succeeded(&self) -> bool {
        self.output.is_ok()
    }

    fn failed(failure: ExecutionFailure) -> Self {
        Self {
            output: Err(failure),
            status: None,
        }
    }
}

/// Invokes the engine under test, one child process per case.
#[derive(Debug, Clone)]
pub struct SubprocessRunner {
    executable: PathBuf,
}

impl SubprocessRunner {
    /// A relative `executable` with more than one component is anchored to
    /// the current directory, since the child runs inside the scan root. A
    /// bare program name is left for `PATH` lookup.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        let executable = executable.into();
        let executable = if executable.is_relative() && executable.components().count() > 1 {
            env::current_dir()
                .map(|cwd| cwd.join(&executable))
                .unwrap_or(executable)
        } else {
            executable
        };
        Self { executable }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Runs the executable with the case path as its only argument and blocks
    /// until the child exits. Failures are returned inside the result, never
    /// propagated.
    pub fn run(&self, case: &TestCase) -> ExecutionResult {
        debug!(
            executable = %self.executable.display(),
            case = %case.name(),
            "spawning target"
        );

        let child = Command::new(&self.executable)
            .arg(case.path())
            .current_dir(case.root())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(source) => {
                warn!(case = %case.name(), error = %source, "failed to launch target");
                return ExecutionResult::failed(ExecutionFailure::Launch {
                    executable: self.executable.clone(),
                    source,
                });
            }
        };

        let output = match child.wait_with_output() {
            Ok(output) => output,
            Err(source) => {
                warn!(case = %case.name(), error = %source, "failed to collect target output");
                return ExecutionResult::failed(ExecutionFailure::Capture {
                    executable: self.executable.clone(),
                    source,
                });
            }
        };

        debug!(case = %case.name(), status = %output.status, "target exited");
        if !output.stderr.is_empty() {
            debug!(
                case = %case.name(),
                stderr = %String::from_utf8_lossy(&output.stderr),
                "target wrote to stderr"
            );
        }

        let text = String::from_utf8(output.stdout).map_err(|e| {
            let valid_up_to = e.utf8_error().valid_up_to();
            warn!(case = %case.name(), valid_up_to, "target stdout is not UTF-8");
            ExecutionFailure::Decode { valid_up_to }
        });

        ExecutionResult {
            output: text,
            status: Some(output.status),
        }
    }
}
