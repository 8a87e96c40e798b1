//! Test doubles for the interaction ports and the fetcher.
//!
//! Available to other crates through the `testing` feature.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};

use starter_git::{FetchReport, GitFetcher, TemplateFetcher, TemplateSource};

use crate::{ConflictResolution, Error, Event, Prompter, Reporter, Result, TargetDirectory, TemplateSelector};

/// A [`Prompter`] answering from pre-recorded scripts.
///
/// Each question pops the next answer of its kind. An exhausted script
/// behaves like a user dismissing the prompt ([`Error::Interrupted`]).
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    templates: VecDeque<TemplateSelector>,
    names: VecDeque<String>,
    conflicts: VecDeque<ConflictResolution>,
    template_prompts: usize,
    name_prompts: usize,
    conflict_prompts: usize,
    initial_templates: Vec<TemplateSelector>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn template(mut self, selector: TemplateSelector) -> Self {
        self.templates.push_back(selector);
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.names.push_back(name.to_string());
        self
    }

    pub fn conflict(mut self, resolution: ConflictResolution) -> Self {
        self.conflicts.push_back(resolution);
        self
    }

    pub fn template_prompts(&self) -> usize {
        self.template_prompts
    }

    pub fn name_prompts(&self) -> usize {
        self.name_prompts
    }

    pub fn conflict_prompts(&self) -> usize {
        self.conflict_prompts
    }

    /// Pre-selected template passed to each template prompt.
    pub fn initial_templates(&self) -> &[TemplateSelector] {
        &self.initial_templates
    }
}

impl Prompter for ScriptedPrompter {
    fn select_template(&mut self, initial: TemplateSelector) -> Result<TemplateSelector> {
        self.template_prompts += 1;
        self.initial_templates.push(initial);
        self.templates.pop_front().ok_or(Error::Interrupted)
    }

    fn project_name(&mut self) -> Result<String> {
        self.name_prompts += 1;
        self.names.pop_front().ok_or(Error::Interrupted)
    }

    fn resolve_conflict(&mut self, _target: &TargetDirectory) -> Result<ConflictResolution> {
        self.conflict_prompts += 1;
        self.conflicts.pop_front().ok_or(Error::Interrupted)
    }
}

/// A [`Reporter`] that keeps every event.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<Event>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any recorded event satisfies `predicate`.
    pub fn saw(&self, predicate: impl Fn(&Event) -> bool) -> bool {
        self.events.iter().any(predicate)
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

/// A [`TemplateFetcher`] serving template identifiers from local
/// repositories.
///
/// Identifiers without a route fail like an unknown remote would.
#[derive(Debug, Default)]
pub struct LocalFetcher {
    routes: HashMap<String, PathBuf>,
    fetcher: GitFetcher,
    calls: RefCell<Vec<(String, PathBuf)>>,
}

impl LocalFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `selector`'s identifier from the repository at `repo`.
    pub fn route(mut self, selector: TemplateSelector, repo: &Path) -> Self {
        self.routes
            .insert(selector.identifier().to_string(), repo.to_path_buf());
        self
    }

    /// Every `(identifier, destination)` pair fetched so far.
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl TemplateFetcher for LocalFetcher {
    fn fetch(&self, source: &TemplateSource, destination: &Path) -> starter_git::Result<FetchReport> {
        self.calls
            .borrow_mut()
            .push((source.identifier().to_string(), destination.to_path_buf()));

        let repo = self.routes.get(source.identifier()).ok_or_else(|| {
            starter_git::Error::InvalidSource {
                identifier: source.identifier().to_string(),
                reason: "repository not found".to_string(),
            }
        })?;
        self.fetcher.fetch(&TemplateSource::local(repo), destination)
    }
}
