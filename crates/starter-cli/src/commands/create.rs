//! Create command implementation
//!
//! Resolves the run configuration and drives the scaffolding pipeline with
//! terminal prompts and output.

use std::path::Path;

use starter_core::{
    ConfigResolver, Outcome, Overrides, PromptStyle, Prompter, Reporter, RunConfig, Scaffolder,
};
use starter_git::{GitFetcher, TemplateFetcher};

use crate::cli::Cli;
use crate::error::Result;
use crate::interactive::DialoguerPrompter;
use crate::output::{TerminalReporter, cancelled_message, final_instructions, print_logo};

/// Run the scaffolding flow in `cwd`.
///
/// A cancelled run is a success; the caller only sees errors.
pub fn run_create(cwd: &Path, cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let style = config.style;
    tracing::debug!(%style, "Presentation style");
    let fetcher = GitFetcher::new(config.fetch);

    print_logo(style);
    let outcome = scaffold(
        cwd,
        config,
        fetcher,
        &mut DialoguerPrompter::new(style),
        &mut TerminalReporter::new(style),
    )?;

    for line in outcome_lines(style, &outcome) {
        println!("{line}");
    }
    Ok(())
}

/// Run the pipeline with the given collaborators.
pub fn scaffold<F: TemplateFetcher>(
    cwd: &Path,
    config: RunConfig,
    fetcher: F,
    prompter: &mut dyn Prompter,
    reporter: &mut dyn Reporter,
) -> Result<Outcome> {
    Ok(Scaffolder::new(config, cwd, fetcher).run(prompter, reporter)?)
}

/// Command-line values layered over the config file.
pub fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        style: cli.style.map(PromptStyle::from),
        force_git: cli.git,
        force_vanilla: cli.vanilla,
        project_name: cli.name.clone(),
        verbose: cli.verbose,
    }
}

pub fn resolve_config(cli: &Cli) -> Result<RunConfig> {
    let resolver = match &cli.config {
        Some(path) => ConfigResolver::with_file(path.clone()),
        None => ConfigResolver::new(),
    };
    Ok(resolver.resolve(&overrides(cli))?)
}

/// What is printed once the pipeline has finished.
pub fn outcome_lines(style: PromptStyle, outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Created { target, .. } => final_instructions(style, target),
        Outcome::Cancelled => vec![cancelled_message(style).to_string()],
    }
}
