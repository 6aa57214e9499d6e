//! Test-case discovery.
//!
//! A case is any non-hidden file under the root with the configured extension.
//! Its expectation lives next to it as `<case>.expect`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::errors::{HarnessError, Result};

/// Suffix appended to a test-case path to name its expectation file.
pub const EXPECT_SUFFIX: &str = ".expect";

/// Extension selected when none is configured.
pub const DEFAULT_EXTENSION: &str = "js";

/// A single fixture found under the scan root.
///
/// `path` is relative to `root` and doubles as the case identifier in reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    root: PathBuf,
    path: PathBuf,
}

impl TestCase {
    pub fn new(root: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            path: path.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path relative to the scan root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn full_path(&self) -> PathBuf {
        self.root.join(&self.path)
    }

    /// `<root>/<path>.expect`
    pub fn expectation_path(&self) -> PathBuf {
        let mut name = self.full_path().into_os_string();
        name.push(EXPECT_SUFFIX);
        PathBuf::from(name)
    }

    /// Identifier shown in reports, always with `/` separators.
    pub fn name(&self) -> String {
        self.path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Walks a directory tree for test-case files.
#[derive(Debug, Clone)]
pub struct FixtureLocator {
    extension: String,
}

impl Default for FixtureLocator {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION)
    }
}

impl FixtureLocator {
    /// `extension` is given without the leading dot.
    pub fn new(extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    fn is_test_case(&self, path: &Path) -> bool {
        let is_expectation = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(EXPECT_SUFFIX));
        !is_expectation && path.extension().is_some_and(|ext| ext == self.extension.as_str())
    }

    /// Recursively scans `root` and returns every matching case.
    ///
    /// Entries are visited in file-name order within each directory, so two
    /// walks over an unchanged tree return the same sequence. Dot-files are
    /// skipped and dot-directories are not entered; the root itself is always
    /// scanned.
    pub fn discover(&self, root: impl AsRef<Path>) -> Result<Vec<TestCase>> {
        let root = root.as_ref();
        let discovery_error = |reason: String| HarnessError::Discovery {
            root: root.to_path_buf(),
            reason,
        };

        let meta = fs::metadata(root).map_err(|e| discovery_error(e.to_string()))?;
        if !meta.is_dir() {
            return Err(discovery_error("not a directory".to_string()));
        }

        let mut cases = Vec::new();
        let walk = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
        for entry in walk {
            let entry = entry.map_err(|e| discovery_error(e.to_string()))?;
            if !entry.file_type().is_file() || !self.is_test_case(entry.path()) {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(root)
                .map_err(|e| discovery_error(e.to_string()))?;
            debug!(case = %relative.display(), "discovered test case");
            cases.push(TestCase::new(root, relative));
        }

        info!(root = %root.display(), count = cases.len(), "discovery finished");
        Ok(cases)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn expectation_path_appends_suffix() {
        let case = TestCase::new("suite", "closure/basic.js");
        assert_eq!(
            case.expectation_path(),
            Path::new("suite").join("closure/basic.js.expect")
        );
    }

    #[test]
    fn discover_recurses_and_skips_expectation_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.js");
        touch(dir.path(), "a.js.expect");
        touch(dir.path(), "nested/deeper/b.js");
        touch(dir.path(), "notes.txt");

        let cases = FixtureLocator::default().discover(dir.path()).unwrap();
        let names: Vec<_> = cases.iter().map(TestCase::name).collect();
        assert_eq!(names, vec!["a.js", "nested/deeper/b.js"]);
    }

    #[test]
    fn discover_honours_configured_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "one.lua");
        touch(dir.path(), "two.js");

        let cases = FixtureLocator::new(".lua").discover(dir.path()).unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].name(), "one.lua");
    }

    #[test]
    fn missing_root_is_a_discovery_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FixtureLocator::default()
            .discover(dir.path().join("nope"))
            .unwrap_err();
        let HarnessError::Discovery { root, .. } = err;
        assert_eq!(root, dir.path().join("nope"));
    }

    #[test]
    fn file_root_is_a_discovery_error() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.js");
        let err = FixtureLocator::default()
            .discover(dir.path().join("a.js"))
            .unwrap_err();
        let HarnessError::Discovery { reason, .. } = err;
        assert_eq!(reason, "not a directory");
    }

    #[test]
    fn hidden_files_and_directories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.js");
        touch(dir.path(), ".hidden.js");
        touch(dir.path(), ".git/x.js");
        touch(dir.path(), ".git/hooks/y.js");
        touch(dir.path(), "nested/.swap.js");

        let cases = FixtureLocator::default().discover(dir.path()).unwrap();
        let names: Vec<_> = cases.iter().map(TestCase::name).collect();
        assert_eq!(names, vec!["a.js"]);
    }

    #[test]
    fn hidden_root_is_still_scanned() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), ".suite/a.js");

        let cases = FixtureLocator::default()
            .discover(dir.path().join(".suite"))
            .unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].name(), "a.js");
    }

    #[test]
    fn empty_root_yields_no_cases() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FixtureLocator::default().discover(dir.path()).unwrap().is_empty());
    }
}
