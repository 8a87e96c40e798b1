//! Interactive prompts for the scaffolding pipeline
//!
//! Uses dialoguer for terminal-based selection and text input.

use std::io;

use dialoguer::{Input, Select};
use starter_core::{
    ConflictResolution, Error, ProjectName, PromptStyle, Prompter, Result, TargetDirectory,
    TemplateSelector,
};

/// A [`Prompter`] asking on the terminal.
#[derive(Debug, Clone, Copy)]
pub struct DialoguerPrompter {
    style: PromptStyle,
}

impl DialoguerPrompter {
    pub fn new(style: PromptStyle) -> Self {
        Self { style }
    }
}

impl Prompter for DialoguerPrompter {
    fn select_template(&mut self, initial: TemplateSelector) -> Result<TemplateSelector> {
        let labels: Vec<&str> = TemplateSelector::ALL
            .iter()
            .map(|selector| template_label(self.style, *selector))
            .collect();
        let initial = TemplateSelector::ALL
            .iter()
            .position(|selector| *selector == initial)
            .unwrap_or(0);

        let mut select = Select::new().items(&labels).default(initial);
        if self.style == PromptStyle::Plain {
            select = select.with_prompt("Select a template");
        }

        let index = select.interact_opt().map_err(prompt_error)?;
        index
            .map(|i| TemplateSelector::ALL[i])
            .ok_or(Error::Interrupted)
    }

    fn project_name(&mut self) -> Result<String> {
        let prompt = match self.style {
            PromptStyle::Banner => "Project name",
            PromptStyle::Plain => "Project name (or \".\" for the current directory)",
        };

        Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                ProjectName::parse(input)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(prompt_error)
    }

    fn resolve_conflict(&mut self, target: &TargetDirectory) -> Result<ConflictResolution> {
        let labels: Vec<&str> = ConflictResolution::ALL
            .iter()
            .map(|resolution| conflict_label(self.style, *resolution))
            .collect();

        let index = Select::new()
            .with_prompt(conflict_question(self.style, target))
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;
        index
            .map(|i| ConflictResolution::ALL[i])
            .ok_or(Error::Interrupted)
    }
}

fn template_label(style: PromptStyle, selector: TemplateSelector) -> &'static str {
    match (style, selector) {
        (PromptStyle::Banner, TemplateSelector::Vanilla) => "Vanilla",
        (PromptStyle::Banner, TemplateSelector::AdvancedGit) => "AdvancedGit",
        (PromptStyle::Plain, selector) => selector.description(),
    }
}

fn conflict_label(style: PromptStyle, resolution: ConflictResolution) -> &'static str {
    match (style, resolution) {
        (PromptStyle::Banner, ConflictResolution::Cancel) => "❌ Cancel installation",
        (PromptStyle::Banner, ConflictResolution::Clear) => "🧹 Remove all files and continue",
        (PromptStyle::Banner, ConflictResolution::Keep) => "✅ Keep files and continue",
        (PromptStyle::Plain, ConflictResolution::Cancel) => "Cancel",
        (PromptStyle::Plain, ConflictResolution::Clear) => "Remove existing files and continue",
        (PromptStyle::Plain, ConflictResolution::Keep) => "Ignore files and continue",
    }
}

fn conflict_question(style: PromptStyle, target: &TargetDirectory) -> String {
    match style {
        PromptStyle::Banner => format!(
            "Directory \"{}\" is not empty. How would you like to proceed?",
            target.name()
        ),
        PromptStyle::Plain => format!(
            "Target directory \"{}\" is not empty. Please choose how to proceed",
            target.name()
        ),
    }
}

/// Ctrl-C while a prompt is active counts as dismissing it.
fn prompt_error(error: dialoguer::Error) -> Error {
    match error {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => Error::Interrupted,
        other => Error::prompt(other.to_string()),
    }
}
