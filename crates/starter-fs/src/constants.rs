//! Well-known names used on the filesystem.

use std::path::Path;

/// Fixed file and directory names vite-starter reads or protects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarterPath {
    /// The `.git` directory, never removed when clearing a target
    GitDir,
    /// Directory under the platform config dir holding user settings
    ConfigDir,
    /// The settings file inside [`StarterPath::ConfigDir`]
    ConfigFile,
}

impl StarterPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitDir => ".git",
            Self::ConfigDir => "vite-starter",
            Self::ConfigFile => "config.toml",
        }
    }
}

impl AsRef<Path> for StarterPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for StarterPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for StarterPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
