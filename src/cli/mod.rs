//! The harness command-line interface.
//!
//! Parses arguments, installs logging, runs the suite against a console
//! reporter, and maps the result onto the process exit status.

use std::process;

use clap::Parser;
use termcolor::StandardStream;
use tracing_subscriber::EnvFilter;

use crate::cli::args::HarnessArgs;
use crate::cli::output::ConsoleReporter;
use crate::harness::{run_suite, HarnessConfig};

pub mod args;
pub mod output;

/// Exit status when at least one case failed.
pub const EXIT_FAILURES: i32 = 1;
/// Exit status when the run could not start (e.g. the root is missing).
pub const EXIT_FATAL: i32 = 2;

fn init_logging(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .try_init();
}

/// The main entry point for the CLI.
pub fn run() {
    let args = HarnessArgs::parse();
    init_logging(args.log_level());

    let config = HarnessConfig::from(&args);
    let reporter = ConsoleReporter::new(StandardStream::stdout(args.color.choice()));

    match run_suite(&config, reporter) {
        Ok(summary) if summary.has_failures() => process::exit(EXIT_FAILURES),
        Ok(_) => {}
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            process::exit(EXIT_FATAL);
        }
    }
}
