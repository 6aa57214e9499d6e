//! Command-line arguments for the harness binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use termcolor::ColorChoice;

use crate::discovery::DEFAULT_EXTENSION;
use crate::harness::{HarnessConfig, DEFAULT_EXECUTABLE};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "expect-runner",
    version,
    about = "Run script fixtures through an engine and compare stdout with .expect files."
)]
pub struct HarnessArgs {
    /// Directory to scan recursively for test cases.
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Engine executable; receives the test-case path as its only argument.
    #[arg(short, long, default_value = DEFAULT_EXECUTABLE)]
    pub executable: PathBuf,

    /// Extension of test-case files.
    #[arg(long = "ext", default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Only run cases whose path contains this substring.
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Do not print the summary after the last case.
    #[arg(long)]
    pub no_summary: bool,

    /// When to color the report.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `auto` colors only when stdout is a terminal.
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

impl HarnessArgs {
    /// Default log directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

impl From<&HarnessArgs> for HarnessConfig {
    fn from(args: &HarnessArgs) -> Self {
        Self {
            root: args.root.clone(),
            executable: args.executable.clone(),
            extension: args.extension.clone(),
            filter: args.filter.clone(),
            summary: !args.no_summary,
        }
    }
}
