//! Ports for user interaction
//!
//! The pipeline asks questions through a [`Prompter`] and narrates progress
//! through a [`Reporter`]. The terminal implementations live in the CLI.

use starter_fs::{ClearReport, DirectoryState};
use starter_git::FetchReport;

use crate::{Result, TargetDirectory, TemplateSelector, ValidationError};

/// The user's decision for a non-empty target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictResolution {
    /// Stop without touching anything
    Cancel,
    /// Delete everything except `.git`, then continue
    Clear,
    /// Continue and extract over the existing files
    Keep,
}

impl ConflictResolution {
    /// Prompt order. The first entry is the initial selection.
    pub const ALL: [ConflictResolution; 3] = [
        ConflictResolution::Cancel,
        ConflictResolution::Clear,
        ConflictResolution::Keep,
    ];
}

/// Asks the user questions.
///
/// Implementations return [`crate::Error::Interrupted`] when the user
/// dismisses a prompt.
pub trait Prompter {
    /// Choose a template, with `initial` pre-selected.
    fn select_template(&mut self, initial: TemplateSelector) -> Result<TemplateSelector>;

    /// Ask for a project name. Implementations should re-ask until the
    /// input is non-empty after trimming.
    fn project_name(&mut self) -> Result<String>;

    /// Decide what to do with the non-empty `target`.
    fn resolve_conflict(&mut self, target: &TargetDirectory) -> Result<ConflictResolution>;
}

/// Progress notifications emitted by the pipeline, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The template prompt is about to be shown
    ChoosingTemplate,
    /// A template was chosen; `forced` when it came from a flag
    TemplateChosen {
        selector: TemplateSelector,
        forced: bool,
    },
    /// The name prompt is about to be shown
    NamingProject,
    /// A prompted name failed validation and will be asked again
    NameRejected(ValidationError),
    TargetResolved(TargetDirectory),
    CheckingTarget,
    /// The target was absent or empty, no decision needed
    TargetReady(DirectoryState),
    TargetCleared(ClearReport),
    TargetKept,
    Downloading(TargetDirectory),
    Downloaded(FetchReport),
}

/// Receives [`Event`]s.
pub trait Reporter {
    fn report(&mut self, event: &Event);
}
