//! vite-starter CLI
//!
//! Scaffolds a Vite JavaScript project from one of the starter templates.

mod cli;
mod commands;
mod error;
mod interactive;
mod output;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::{CliError, Result};

fn main() {
    let result = run();
    if let Err(e) = &result {
        eprintln!("{}: {}", "error".red().bold(), e);
    }
    std::process::exit(exit_code(&result));
}

/// A cancelled run is `Ok`; every error exits with 1.
fn exit_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let cwd = std::env::current_dir()
        .map_err(|e| CliError::user(format!("Cannot determine the current directory: {e}")))?;
    commands::run_create(&cwd, &cli)
}
