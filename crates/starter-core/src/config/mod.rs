//! Configuration resolution
//!
//! Settings are merged from these sources (later sources override earlier):
//!
//! 1. **Built-in defaults** - banner style, vanilla pre-selected
//! 2. **Config file** - `<config_dir>/vite-starter/config.toml`, or an
//!    explicit path
//! 3. **Overrides** - command-line flags and environment variables
//!
//! Template identifiers are fixed and cannot be configured.
//!
//! ```toml
//! [ui]
//! style = "plain"
//!
//! [template]
//! default = "advanced-git"
//! ```

mod file;
mod resolver;

pub use file::{ConfigFile, TemplateSection, UiSection};
pub use resolver::{ConfigResolver, Overrides, RunConfig};
