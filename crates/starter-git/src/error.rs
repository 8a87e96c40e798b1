//! Error types for starter-git

use std::path::PathBuf;

/// Result type for starter-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching a template
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] starter_fs::Error),

    #[error("Invalid template source '{identifier}': {reason}")]
    InvalidSource { identifier: String, reason: String },

    #[error("Reference '{reference}' not found in template")]
    ReferenceNotFound { reference: String },

    #[error("Subdirectory '{path}' not found in template")]
    SubdirectoryNotFound { path: PathBuf },

    #[error("Destination {path} is not empty")]
    DestinationNotEmpty { path: PathBuf },
}
