//! Target directory conflict resolution
//!
//! ```text
//!   inspect(target)
//!     Absent | EmptyExisting  -> Ready
//!     NonEmptyExisting        -> ask once
//!                                  Cancel -> Cancelled (no mutation)
//!                                  Clear  -> delete all but .git -> Cleared
//!                                  Keep   -> Kept
//! ```

use starter_fs::{ClearReport, DirectoryState, StarterPath};

use crate::{ConflictResolution, Error, Prompter, Result, TargetDirectory};

/// State of the target once conflicts have been dealt with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing to resolve: the target was absent or empty
    Ready(DirectoryState),
    /// Existing entries were removed
    Cleared(ClearReport),
    /// Existing entries were left in place
    Kept,
    /// The user chose to stop
    Cancelled,
}

impl Resolution {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Resolution::Cancelled)
    }
}

/// Inspect `target` and, if it has content, ask `prompter` exactly once what
/// to do with it.
///
/// Dismissing the prompt counts as [`ConflictResolution::Cancel`].
/// Filesystem failures are returned unretried.
pub fn prepare_target<P: Prompter + ?Sized>(
    target: &TargetDirectory,
    prompter: &mut P,
) -> Result<Resolution> {
    let state = starter_fs::inspect(target.path())?;
    if !state.has_conflict() {
        return Ok(Resolution::Ready(state));
    }

    let choice = match prompter.resolve_conflict(target) {
        Ok(choice) => choice,
        Err(Error::Interrupted) => ConflictResolution::Cancel,
        Err(e) => return Err(e),
    };
    tracing::debug!(?choice, path = %target.path().display(), "Conflict resolved");

    match choice {
        ConflictResolution::Cancel => Ok(Resolution::Cancelled),
        ConflictResolution::Clear => {
            let report = starter_fs::clear_except(target.path(), &[StarterPath::GitDir.as_str()])?;
            Ok(Resolution::Cleared(report))
        }
        ConflictResolution::Keep => Ok(Resolution::Kept),
    }
}
