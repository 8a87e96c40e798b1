//! Local template repositories.
//!
//! Fetch tests never touch the network: they clone from a real git
//! repository created on disk with `git2`.

use std::fs;
use std::path::Path;

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

/// A git repository in a temporary directory, standing in for a remote
/// template.
///
/// # Example
///
/// ```rust,no_run
/// use starter_test_utils::TemplateRepo;
///
/// let template = TemplateRepo::with_files(&[("index.html", "<html></html>")]);
/// template.tag("v1");
/// let identifier = template.identifier();
/// ```
pub struct TemplateRepo {
    temp_dir: TempDir,
    repo: Repository,
}

impl TemplateRepo {
    /// Initialise an empty repository.
    ///
    /// # Panics
    /// Panics if `git2::Repository::init` fails.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::init(temp_dir.path()).unwrap_or_else(|e| {
            panic!(
                "TemplateRepo::new: failed to init repository at {}: {e}",
                temp_dir.path().display()
            )
        });
        Self { temp_dir, repo }
    }

    /// Initialise a repository and commit `files` as its first commit.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let template = Self::new();
        template.commit(files, "Initial template");
        template
    }

    /// Root of the working tree.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The identifier a fetcher should be given to clone this repository.
    pub fn identifier(&self) -> String {
        self.path().to_string_lossy().into_owned()
    }

    /// Write `files` into the working tree and commit everything on HEAD.
    ///
    /// # Panics
    /// Panics if any git or filesystem operation fails.
    pub fn commit(&self, files: &[(&str, &str)], message: &str) -> Oid {
        for (relative, content) in files {
            let path = self.path().join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, content).unwrap();
        }

        let mut index = self.repo.index().unwrap();
        index
            .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
            .unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let signature = Signature::now("Test User", "test@example.com").unwrap();

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .unwrap_or_else(|e| panic!("TemplateRepo::commit: {e}"))
    }

    /// Create a lightweight tag named `name` on HEAD.
    pub fn tag(&self, name: &str) -> Oid {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .unwrap();
        head.id()
    }
}

impl Default for TemplateRepo {
    fn default() -> Self {
        Self::new()
    }
}
