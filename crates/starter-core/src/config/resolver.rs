//! Merging defaults, the config file and overrides

use std::path::PathBuf;

use starter_fs::{ConfigStore, StarterPath};
use starter_git::FetchOptions;

use super::file::ConfigFile;
use crate::{Error, PromptStyle, Result, TemplateSelector};

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub style: Option<PromptStyle>,
    pub force_git: bool,
    pub force_vanilla: bool,
    pub project_name: Option<String>,
    pub verbose: bool,
}

/// Everything one scaffolding run needs to know up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Selector that skips the template prompt
    pub forced_template: Option<TemplateSelector>,
    /// Selector highlighted when the template prompt is shown
    pub default_template: TemplateSelector,
    /// Name that skips the name prompt
    pub project_name: Option<String>,
    pub style: PromptStyle,
    pub fetch: FetchOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            forced_template: None,
            default_template: TemplateSelector::default(),
            project_name: None,
            style: PromptStyle::default(),
            fetch: FetchOptions::default(),
        }
    }
}

/// Resolves a [`RunConfig`] from the config file and [`Overrides`].
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    /// File named explicitly by the user; must exist
    explicit_file: Option<PathBuf>,

    /// Override for the global config directory (used for testing).
    /// When `None`, the platform-appropriate directory is used via `dirs::config_dir()`.
    config_dir_override: Option<PathBuf>,
}

impl ConfigResolver {
    /// Use the platform config directory:
    /// - Linux: `~/.config/vite-starter/`
    /// - macOS: `~/Library/Application Support/vite-starter/`
    /// - Windows: `%APPDATA%\vite-starter\`
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from `dir/config.toml` instead of the platform directory.
    pub fn with_config_dir(dir: PathBuf) -> Self {
        Self {
            explicit_file: None,
            config_dir_override: Some(dir),
        }
    }

    /// Read settings from `path`, which must exist.
    pub fn with_file(path: PathBuf) -> Self {
        Self {
            explicit_file: Some(path),
            config_dir_override: None,
        }
    }

    fn default_file(&self) -> Option<PathBuf> {
        let dir = match &self.config_dir_override {
            Some(dir) => dir.clone(),
            None => dirs::config_dir()?.join(StarterPath::ConfigDir.as_str()),
        };
        Some(dir.join(StarterPath::ConfigFile.as_str()))
    }

    /// Load the config file, if any.
    pub fn load(&self) -> Result<ConfigFile> {
        let store = ConfigStore::new();

        if let Some(path) = &self.explicit_file {
            if !path.is_file() {
                return Err(Error::Config {
                    path: path.clone(),
                    message: "file not found".to_string(),
                });
            }
            return store.load(path).map_err(|e| config_error(path.clone(), e));
        }

        let Some(path) = self.default_file() else {
            tracing::debug!("No platform config directory, using defaults");
            return Ok(ConfigFile::default());
        };
        store
            .load_optional(&path)
            .map(Option::unwrap_or_default)
            .map_err(|e| config_error(path, e))
    }

    /// Merge defaults, the config file and `overrides`.
    pub fn resolve(&self, overrides: &Overrides) -> Result<RunConfig> {
        let file = self.load()?;
        let defaults = RunConfig::default();

        let config = RunConfig {
            forced_template: TemplateSelector::from_flags(
                overrides.force_git,
                overrides.force_vanilla,
            ),
            default_template: file.template.default.unwrap_or(defaults.default_template),
            project_name: overrides.project_name.clone(),
            style: overrides
                .style
                .or(file.ui.style)
                .unwrap_or(defaults.style),
            fetch: FetchOptions {
                verbose: overrides.verbose,
                ..defaults.fetch
            },
        };
        tracing::debug!(?config, "Resolved run configuration");
        Ok(config)
    }
}

fn config_error(path: PathBuf, error: starter_fs::Error) -> Error {
    let message = match error {
        starter_fs::Error::ConfigParse { message, .. } => message,
        other => other.to_string(),
    };
    Error::Config { path, message }
}
