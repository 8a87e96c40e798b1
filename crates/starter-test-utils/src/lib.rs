//! Shared test utilities for the vite-starter workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: local template repositories built with `git2`
//! - [`dir`]: [`TestDir`] builder for target directory scenarios

pub mod dir;
pub mod git;

pub use dir::TestDir;
pub use git::TemplateRepo;
