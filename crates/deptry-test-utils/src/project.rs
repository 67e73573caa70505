//! [`TestProject`] builder for configuration scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File name the resolver looks for.
pub const PYPROJECT: &str = "pyproject.toml";

/// A temporary Python project directory.
///
/// # Example
///
/// ```rust,no_run
/// use deptry_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_deptry_section(&[("ignore_missing", r#"["pkgA"]"#)]);
/// assert!(project.manifest_path().exists());
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the project root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of `pyproject.toml` inside the project, whether or not it exists.
    pub fn manifest_path(&self) -> PathBuf {
        self.root().join(PYPROJECT)
    }

    /// Write `content` verbatim to `pyproject.toml`.
    pub fn write_pyproject(&self, content: &str) {
        fs::write(self.manifest_path(), content).unwrap();
    }

    /// Write a `pyproject.toml` with a `[project]` table and a
    /// `[tool.deptry]` table holding `entries`.
    ///
    /// Values are raw TOML, e.g. `("skip_missing", "true")`.
    pub fn write_deptry_section(&self, entries: &[(&str, &str)]) {
        let mut content =
            String::from("[project]\nname = \"demo\"\nversion = \"0.1.0\"\n\n[tool.deptry]\n");
        for (key, value) in entries {
            content.push_str(&format!("{key} = {value}\n"));
        }
        self.write_pyproject(&content);
    }
}
