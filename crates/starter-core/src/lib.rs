//! Core scaffolding pipeline for vite-starter
//!
//! This crate coordinates the layer 0 crates into the scaffolding flow:
//!
//! - **Template selection**: a forced selector or a prompt
//! - **Directory resolution**: project name to target path, then the
//!   cancel / clear / keep decision for non-empty targets
//! - **Template acquisition**: a single fetch into the resolved target
//! - **Configuration resolution**: defaults, config file and overrides
//!
//! ```text
//!          starter-cli
//!               |
//!          starter-core
//!           /        \
//!     starter-fs   starter-git
//! ```
//!
//! User interaction goes through the [`Prompter`] and [`Reporter`] ports so
//! the flow runs unchanged under a terminal or a scripted test.

pub mod config;
pub mod error;
pub mod project;
pub mod prompt;
pub mod resolver;
pub mod scaffold;
pub mod style;
pub mod template;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{ConfigFile, ConfigResolver, Overrides, RunConfig};
pub use error::{Error, FetchError, Result, ValidationError};
pub use project::{ProjectName, TargetDirectory, resolve};
pub use prompt::{ConflictResolution, Event, Prompter, Reporter};
pub use resolver::{Resolution, prepare_target};
pub use scaffold::{Outcome, Scaffolder};
pub use style::PromptStyle;
pub use template::TemplateSelector;
