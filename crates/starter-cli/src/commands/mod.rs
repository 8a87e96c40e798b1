//! Command implementations for starter-cli

pub mod create;

pub use create::run_create;
