//! Configuration file loading

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Loads settings files from disk.
///
/// The format is detected from the file extension. Only TOML is accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    /// Create a new ConfigStore.
    pub fn new() -> Self {
        Self
    }

    /// Load and deserialize a configuration file.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        match extension.to_lowercase().as_str() {
            "toml" => {
                let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
                toml::from_str(&content).map_err(|e| Error::ConfigParse {
                    path: path.to_path_buf(),
                    format: "TOML".into(),
                    message: e.to_string(),
                })
            }
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    /// Like [`ConfigStore::load`], but a missing file yields `None`.
    pub fn load_optional<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "No config file found, skipping");
            return Ok(None);
        }
        tracing::debug!(path = %path.display(), "Loading config file");
        self.load(path).map(Some)
    }
}
