//! Degit-style template fetching for vite-starter
//!
//! A template is a git repository whose tree (without history) is copied
//! into a destination directory. Cloning happens in a private staging
//! directory which is discarded afterwards, so nothing is cached between runs.

pub mod error;
pub mod export;
pub mod fetcher;
pub mod source;

pub use error::{Error, Result};
pub use fetcher::{FetchOptions, FetchReport, GitFetcher, TemplateFetcher};
pub use source::{Host, TemplateSource};
