//! Error types for starter-core

use std::path::PathBuf;

/// Result type for starter-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scaffolding
///
/// A user cancelling at the conflict prompt is not an error; it is reported
/// as [`crate::Outcome::Cancelled`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// User input failed a prompt-level constraint
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Existence check, listing or deletion failed
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] starter_fs::Error),

    /// The template could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The prompt backend failed
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// The user dismissed a prompt (Esc / Ctrl-C)
    #[error("Prompt interrupted")]
    Interrupted,

    /// A config file exists but could not be used
    #[error("Invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl Error {
    /// Create a prompt error with the given message
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }
}

/// Input rejected before any filesystem work happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a project name.")]
    EmptyName,
}

/// The template fetch failed for any reason (network, bad identifier,
/// extraction).
#[derive(Debug, thiserror::Error)]
#[error("Failed to clone template: {message}")]
pub struct FetchError {
    /// Underlying failure message
    pub message: String,
    #[source]
    source: Option<starter_git::Error>,
}

impl From<starter_git::Error> for FetchError {
    fn from(error: starter_git::Error) -> Self {
        Self {
            message: error.to_string(),
            source: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_wraps_message() {
        let error = FetchError::from(starter_git::Error::ReferenceNotFound {
            reference: "dev".into(),
        });
        assert_eq!(
            error.to_string(),
            "Failed to clone template: Reference 'dev' not found in template"
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_validation_message() {
        let error: Error = ValidationError::EmptyName.into();
        assert_eq!(error.to_string(), "Please enter a project name.");
    }
}
