//! Target directory inspection and clearing
//!
//! The state of a target is derived on demand from the filesystem and never
//! cached: existence first, then whether listing yields at least one entry.

use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// What a target path currently looks like on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    /// Nothing exists at the path
    Absent,
    /// A directory with no entries
    EmptyExisting,
    /// A directory with at least one entry
    NonEmptyExisting,
}

impl DirectoryState {
    /// Whether scaffolding into this state needs a user decision first.
    pub fn has_conflict(&self) -> bool {
        matches!(self, DirectoryState::NonEmptyExisting)
    }
}

impl std::fmt::Display for DirectoryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DirectoryState::Absent => "absent",
            DirectoryState::EmptyExisting => "empty",
            DirectoryState::NonEmptyExisting => "not empty",
        };
        write!(f, "{}", label)
    }
}

/// Entries touched by [`clear_except`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearReport {
    /// Direct children that were deleted
    pub removed: Vec<PathBuf>,
    /// Direct children left in place because their name was preserved
    pub preserved: Vec<PathBuf>,
}

/// Compute the [`DirectoryState`] of `path`.
///
/// A path that exists but is not a directory is an error, as are any
/// permission or listing failures.
pub fn inspect(path: &Path) -> Result<DirectoryState> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(DirectoryState::Absent),
        Err(e) => return Err(Error::io(path, e)),
    };

    if !metadata.is_dir() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let mut entries = fs::read_dir(path).map_err(|e| Error::io(path, e))?;
    let state = match entries.next() {
        None => DirectoryState::EmptyExisting,
        Some(Ok(_)) => DirectoryState::NonEmptyExisting,
        Some(Err(e)) => return Err(Error::io(path, e)),
    };

    tracing::debug!(path = %path.display(), %state, "Inspected target directory");
    Ok(state)
}

/// Remove every direct child of `dir` whose name is not in `preserved`.
///
/// Directories are removed recursively. Entries that disappear while the
/// listing is walked are ignored; entries refused with a permission error are
/// made writable and retried once.
pub fn clear_except(dir: &Path, preserved: &[&str]) -> Result<ClearReport> {
    let mut report = ClearReport::default();
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let name = entry.file_name();
        let child = entry.path();

        if preserved.iter().any(|keep| name.as_os_str() == OsStr::new(keep)) {
            tracing::debug!(path = %child.display(), "Preserving entry");
            report.preserved.push(child);
            continue;
        }

        remove_entry(&child)?;
        report.removed.push(child);
    }

    Ok(report)
}

fn remove_entry(path: &Path) -> Result<()> {
    match remove_once(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Entry vanished before removal");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            tracing::debug!(path = %path.display(), "Retrying removal after clearing read-only flags");
            make_writable(path);
            match remove_once(path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(Error::io(path, e)),
            }
        }
        Err(e) => Err(Error::io(path, e)),
    }
}

fn remove_once(path: &Path) -> std::io::Result<()> {
    let file_type = fs::symlink_metadata(path)?.file_type();
    if file_type.is_dir() {
        fs::remove_dir_all(path)
    } else if file_type.is_symlink() {
        // Directory symlinks on Windows need remove_dir
        fs::remove_file(path).or_else(|_| fs::remove_dir(path))
    } else {
        fs::remove_file(path)
    }
}

/// Best-effort: make `path` and everything below it removable by the owner.
fn make_writable(path: &Path) {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return;
    };
    if metadata.file_type().is_symlink() {
        return;
    }

    grant_owner_write(path, &metadata);

    if metadata.is_dir()
        && let Ok(entries) = fs::read_dir(path)
    {
        for entry in entries.flatten() {
            make_writable(&entry.path());
        }
    }
}

/// Adds the owner's write bit (and search bit on directories); group and
/// other bits are left as they were.
#[cfg(unix)]
fn grant_owner_write(path: &Path, metadata: &fs::Metadata) {
    use std::os::unix::fs::PermissionsExt;

    let owner_bits = if metadata.is_dir() { 0o700 } else { 0o200 };
    let mode = metadata.permissions().mode();
    if mode & owner_bits != owner_bits {
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(mode | owner_bits));
    }
}

#[cfg(not(unix))]
#[allow(clippy::permissions_set_readonly_false)]
fn grant_owner_write(path: &Path, metadata: &fs::Metadata) {
    let mut permissions = metadata.permissions();
    if permissions.readonly() {
        permissions.set_readonly(false);
        let _ = fs::set_permissions(path, permissions);
    }
}
