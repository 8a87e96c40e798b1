//! Fetching templates into a destination directory

use std::path::{Path, PathBuf};

use git2::build::{CheckoutBuilder, RepoBuilder};
use git2::{Cred, Oid, RemoteCallbacks, Repository};
use starter_fs::DirectoryState;

use crate::export::export_tree;
use crate::{Error, Result, TemplateSource};

/// Behaviour switches for a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Write into a destination that already has content
    pub force: bool,
    /// Log every extracted file at info level
    pub verbose: bool,
}

impl Default for FetchOptions {
    /// Overwrite allowed, quiet.
    fn default() -> Self {
        Self {
            force: true,
            verbose: false,
        }
    }
}

/// Result of a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    /// Destination the template was extracted into
    pub destination: PathBuf,
    /// Commit whose tree was extracted
    pub commit: Oid,
    /// Number of files written
    pub files_written: usize,
}

/// Fetches a template into a destination directory.
///
/// A fetch is a single attempt. Implementations must not retry and must
/// leave entries of the destination that the template does not contain
/// untouched.
pub trait TemplateFetcher {
    fn fetch(&self, source: &TemplateSource, destination: &Path) -> Result<FetchReport>;
}

/// [`TemplateFetcher`] backed by libgit2.
///
/// Each fetch clones into a fresh staging directory, so no state is reused
/// between runs. Remote sources without a ref are cloned with depth 1.
#[derive(Debug, Clone, Default)]
pub struct GitFetcher {
    options: FetchOptions,
}

impl GitFetcher {
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }

    fn clone_into(&self, source: &TemplateSource, staging: &Path) -> Result<Repository> {
        let mut fetch_options = git2::FetchOptions::new();
        if !source.is_local() && source.reference().is_none() {
            fetch_options.depth(1);
        }
        if source.uses_ssh() {
            let mut callbacks = RemoteCallbacks::new();
            callbacks.credentials(|_url, username, _allowed| {
                Cred::ssh_key_from_agent(username.unwrap_or("git"))
            });
            fetch_options.remote_callbacks(callbacks);
        }

        tracing::debug!(url = %source.url(), staging = %staging.display(), "Cloning template");
        let repo = RepoBuilder::new()
            .fetch_options(fetch_options)
            .clone(source.url(), staging)?;
        Ok(repo)
    }
}

impl TemplateFetcher for GitFetcher {
    fn fetch(&self, source: &TemplateSource, destination: &Path) -> Result<FetchReport> {
        if !self.options.force
            && starter_fs::inspect(destination)? == DirectoryState::NonEmptyExisting
        {
            return Err(Error::DestinationNotEmpty {
                path: destination.to_path_buf(),
            });
        }

        let staging = tempfile::Builder::new()
            .prefix("vite-starter-")
            .tempdir()
            .map_err(|e| starter_fs::Error::io(std::env::temp_dir(), e))?;

        let repo = self.clone_into(source, staging.path())?;
        let commit = checkout_reference(&repo, source.reference())?;

        let root = match source.subdir() {
            Some(subdir) => {
                let root = staging.path().join(subdir);
                if !root.is_dir() {
                    return Err(Error::SubdirectoryNotFound {
                        path: subdir.to_path_buf(),
                    });
                }
                root
            }
            None => staging.path().to_path_buf(),
        };

        let files_written = export_tree(&root, destination, self.options.verbose)?;
        tracing::debug!(%commit, files_written, destination = %destination.display(), "Template extracted");

        Ok(FetchReport {
            destination: destination.to_path_buf(),
            commit,
            files_written,
        })
    }
}

/// Check out `reference` (branch, tag or commit) if given and return the
/// commit now in the working tree.
fn checkout_reference(repo: &Repository, reference: Option<&str>) -> Result<Oid> {
    let Some(name) = reference else {
        return Ok(repo.head()?.peel_to_commit()?.id());
    };

    let object = repo
        .revparse_single(&format!("origin/{name}"))
        .or_else(|_| repo.revparse_single(name))
        .map_err(|_| Error::ReferenceNotFound {
            reference: name.to_string(),
        })?;
    let commit = object.peel_to_commit()?;

    let mut checkout = CheckoutBuilder::new();
    checkout.force();
    repo.checkout_tree(commit.as_object(), Some(&mut checkout))?;
    repo.set_head_detached(commit.id())?;

    tracing::debug!(reference = name, commit = %commit.id(), "Checked out template reference");
    Ok(commit.id())
}
