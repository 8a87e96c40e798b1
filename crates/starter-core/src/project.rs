//! Project names and the target directories they resolve to

use std::fmt;
use std::path::{Path, PathBuf};

use crate::ValidationError;

/// Sentinel name meaning "scaffold into the current working directory".
pub const CURRENT_DIR: &str = ".";

/// A validated, trimmed project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Trim `raw` and reject it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the `.` sentinel.
    pub fn is_current_dir(&self) -> bool {
        self.0 == CURRENT_DIR
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Absolute directory a template is extracted into.
///
/// Computed once per run and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDirectory {
    path: PathBuf,
    name: ProjectName,
}

impl TargetDirectory {
    /// `.` resolves to `cwd`; any other name is joined onto it.
    pub fn resolve(name: &ProjectName, cwd: &Path) -> Self {
        let path = if name.is_current_dir() {
            cwd.to_path_buf()
        } else {
            cwd.join(name.as_str())
        };
        tracing::debug!(name = %name, path = %path.display(), "Resolved target directory");
        Self {
            path,
            name: name.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Name shown to the user: the directory's own name for `.`.
    pub fn display_name(&self) -> String {
        if self.name.is_current_dir() {
            self.path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.path.display().to_string())
        } else {
            self.name.to_string()
        }
    }

    /// Argument for the `cd` line of the final instructions, if one is needed.
    pub fn cd_hint(&self) -> Option<&str> {
        (!self.name.is_current_dir()).then(|| self.name.as_str())
    }
}

/// Validate `raw_name` and resolve it against `cwd`.
pub fn resolve(raw_name: &str, cwd: &Path) -> Result<TargetDirectory, ValidationError> {
    let name = ProjectName::parse(raw_name)?;
    Ok(TargetDirectory::resolve(&name, cwd))
}
