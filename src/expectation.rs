//! Loading the expected output recorded next to each test case.

use std::fs;

use crate::discovery::TestCase;
use crate::errors::MissingExpectation;

/// Reads the expected output for `case` verbatim.
///
/// Whitespace is left untouched here; trimming happens in [`crate::compare`].
pub fn load_expected(case: &TestCase) -> Result<String, MissingExpectation> {
    let path = case.expectation_path();
    fs::read_to_string(&path).map_err(|source| MissingExpectation { path, source })
}
