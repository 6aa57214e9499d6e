//! Output comparison.
//!
//! The pass/fail decision is exact equality after trimming leading and
//! trailing whitespace from both sides. The line diff is presentation only.

use difference::{Changeset, Difference};

/// Returns true when `actual` and `expected` are equal once trimmed.
pub fn compare(actual: &str, expected: &str) -> bool {
    actual.trim() == expected.trim()
}

/// Trimmed expected/actual pair kept around for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub expected: String,
    pub actual: String,
}

impl Comparison {
    pub fn new(actual: &str, expected: &str) -> Self {
        Self {
            expected: expected.trim().to_string(),
            actual: actual.trim().to_string(),
        }
    }

    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }

    /// Line-level diff from expected to actual.
    pub fn line_diff(&self) -> Vec<Difference> {
        Changeset::new(&self.expected, &self.actual, "\n").diffs
    }
}
