//! [`TestDir`] builder for target directory scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary working directory with helpers for populating a target and
/// asserting on its contents afterwards.
///
/// # Example
///
/// ```rust,no_run
/// use starter_test_utils::TestDir;
///
/// let dir = TestDir::new();
/// dir.write_file("demo/index.html", "<html></html>");
/// dir.fake_git_dir("demo");
/// assert_eq!(dir.children("demo"), vec![".git", "index.html"]);
/// ```
pub struct TestDir {
    temp_dir: TempDir,
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` under the root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestDir::write_file: {}: {e}", path.display()));
        self
    }

    /// Create `relative` as a directory (and its parents).
    pub fn create_dir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.path(relative)).unwrap();
        self
    }

    /// Create a minimal `.git` directory inside `relative` without initialising
    /// a real repository.
    pub fn fake_git_dir(&self, relative: &str) -> &Self {
        self.write_file(&format!("{relative}/.git/HEAD"), "ref: refs/heads/main\n")
    }

    /// Sorted names of the direct children of `relative`.
    ///
    /// # Panics
    /// Panics if the directory cannot be listed.
    pub fn children(&self, relative: &str) -> Vec<String> {
        let path = self.path(relative);
        let mut names: Vec<String> = fs::read_dir(&path)
            .unwrap_or_else(|e| panic!("TestDir::children: {}: {e}", path.display()))
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Read the file at `relative` as text.
    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that `relative` exists.
    pub fn assert_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            full_path.exists(),
            "Expected path to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `relative` does **not** exist.
    pub fn assert_missing(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            !full_path.exists(),
            "Expected path NOT to exist: {}",
            full_path.display()
        );
    }
}
