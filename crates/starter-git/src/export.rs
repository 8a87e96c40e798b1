//! Copying a checked-out template tree into its destination

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::Result;

/// Name of the history directory that is never exported.
const GIT_DIR: &str = ".git";

/// Copy every file below `from` into `to`, skipping `.git` entries.
///
/// Existing files in `to` are overwritten and entries that are not part of
/// the template are left alone. Returns the number of files written.
pub fn export_tree(from: &Path, to: &Path, verbose: bool) -> Result<usize> {
    fs::create_dir_all(to).map_err(|e| starter_fs::Error::io(to, e))?;

    let walker = WalkDir::new(from)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != GIT_DIR);

    let mut written = 0;
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| from.to_path_buf());
            starter_fs::Error::io(path, e.into())
        })?;
        let Ok(relative) = entry.path().strip_prefix(from) else {
            continue;
        };
        let target = to.join(relative);
        let file_type = entry.file_type();

        // Existing entries are inspected without following links so a
        // symlink in the destination is replaced, never written through.
        let existing = fs::symlink_metadata(&target).ok().map(|m| m.file_type());

        if file_type.is_dir() {
            if existing.is_some_and(|kind| !kind.is_dir()) {
                fs::remove_file(&target).map_err(|e| starter_fs::Error::io(&target, e))?;
            }
            fs::create_dir_all(&target).map_err(|e| starter_fs::Error::io(&target, e))?;
            continue;
        }

        match existing {
            Some(kind) if kind.is_dir() => {
                fs::remove_dir_all(&target).map_err(|e| starter_fs::Error::io(&target, e))?
            }
            Some(_) => fs::remove_file(&target).map_err(|e| starter_fs::Error::io(&target, e))?,
            None => {}
        }

        if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| starter_fs::Error::io(&target, e))?;
        }
        written += 1;

        if verbose {
            tracing::info!(file = %relative.display(), "Extracted");
        } else {
            tracing::trace!(file = %relative.display(), "Extracted");
        }
    }

    Ok(written)
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> Result<()> {
    let link = fs::read_link(from).map_err(|e| starter_fs::Error::io(from, e))?;
    std::os::unix::fs::symlink(&link, to).map_err(|e| starter_fs::Error::io(to, e))?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to).map_err(|e| starter_fs::Error::io(to, e))?;
    Ok(())
}
