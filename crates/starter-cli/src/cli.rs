//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use starter_core::PromptStyle;

/// Scaffold a Vite JavaScript project from a starter template
#[derive(Parser, Debug)]
#[command(name = "vite-starter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project name, or "." to use the current directory
    ///
    /// Skips the name prompt when given.
    pub name: Option<String>,

    /// Use the "Advanced work with Git" template without asking
    #[arg(long)]
    pub git: bool,

    /// Use the Vanilla template without asking
    #[arg(long)]
    pub vanilla: bool,

    /// Presentation style for prompts and progress
    #[arg(long, value_enum, env = "VITE_STARTER_STYLE")]
    pub style: Option<StyleArg>,

    /// Read settings from this file instead of the global config
    #[arg(long, value_name = "PATH", env = "VITE_STARTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command-line spelling of [`PromptStyle`].
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleArg {
    /// Boxed logo and numbered steps
    Banner,
    /// Undecorated prompts
    Plain,
}

impl From<StyleArg> for PromptStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Banner => PromptStyle::Banner,
            StyleArg::Plain => PromptStyle::Plain,
        }
    }
}
