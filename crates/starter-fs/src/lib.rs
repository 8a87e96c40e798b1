//! Filesystem contract for vite-starter
//!
//! Provides target directory inspection, conflict clearing that preserves
//! version-control history, and config file loading.

pub mod config;
pub mod constants;
pub mod directory;
pub mod error;

pub use config::ConfigStore;
pub use constants::StarterPath;
pub use directory::{ClearReport, DirectoryState, clear_except, inspect};
pub use error::{Error, Result};
