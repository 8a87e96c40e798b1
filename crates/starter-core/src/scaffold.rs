//! The scaffolding pipeline
//!
//! Runs strictly forward: template, name, target directory, fetch. The
//! only early exit is the user cancelling; errors are returned to the caller,
//! which decides the process exit status once.

use std::path::PathBuf;

use starter_git::{FetchReport, TemplateFetcher, TemplateSource};

use crate::{
    Error, Event, FetchError, ProjectName, Prompter, Reporter, Resolution, Result, RunConfig,
    TargetDirectory, TemplateSelector, prepare_target,
};

/// How a run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The template was extracted into `target`
    Created {
        target: TargetDirectory,
        selector: TemplateSelector,
        report: FetchReport,
    },
    /// The user stopped the run; nothing was modified
    Cancelled,
}

/// Drives one scaffolding run.
pub struct Scaffolder<F> {
    config: RunConfig,
    cwd: PathBuf,
    fetcher: F,
}

impl<F: TemplateFetcher> Scaffolder<F> {
    pub fn new(config: RunConfig, cwd: impl Into<PathBuf>, fetcher: F) -> Self {
        Self {
            config,
            cwd: cwd.into(),
            fetcher,
        }
    }

    /// Run the whole pipeline.
    ///
    /// A dismissed prompt ends the run as [`Outcome::Cancelled`].
    pub fn run(&self, prompter: &mut dyn Prompter, reporter: &mut dyn Reporter) -> Result<Outcome> {
        match self.run_steps(prompter, reporter) {
            Err(Error::Interrupted) => {
                tracing::debug!("Prompt dismissed, cancelling");
                Ok(Outcome::Cancelled)
            }
            other => other,
        }
    }

    fn run_steps(&self, prompter: &mut dyn Prompter, reporter: &mut dyn Reporter) -> Result<Outcome> {
        let selector = self.choose_template(prompter, reporter)?;
        let target = self.resolve_target(prompter, reporter)?;

        reporter.report(&Event::CheckingTarget);
        match prepare_target(&target, prompter)? {
            Resolution::Cancelled => return Ok(Outcome::Cancelled),
            Resolution::Ready(state) => reporter.report(&Event::TargetReady(state)),
            Resolution::Cleared(report) => reporter.report(&Event::TargetCleared(report)),
            Resolution::Kept => reporter.report(&Event::TargetKept),
        }

        reporter.report(&Event::Downloading(target.clone()));
        let report = self.fetch(selector, &target)?;
        reporter.report(&Event::Downloaded(report.clone()));

        Ok(Outcome::Created {
            target,
            selector,
            report,
        })
    }

    /// The forced selector if there is one, otherwise the user's choice.
    pub fn choose_template(
        &self,
        prompter: &mut dyn Prompter,
        reporter: &mut dyn Reporter,
    ) -> Result<TemplateSelector> {
        if let Some(selector) = self.config.forced_template {
            reporter.report(&Event::TemplateChosen {
                selector,
                forced: true,
            });
            return Ok(selector);
        }

        reporter.report(&Event::ChoosingTemplate);
        let selector = prompter.select_template(self.config.default_template)?;
        reporter.report(&Event::TemplateChosen {
            selector,
            forced: false,
        });
        Ok(selector)
    }

    /// Obtain a valid project name and resolve it against the working
    /// directory.
    ///
    /// A configured name that fails validation is an error; a prompted one
    /// is asked again.
    pub fn resolve_target(
        &self,
        prompter: &mut dyn Prompter,
        reporter: &mut dyn Reporter,
    ) -> Result<TargetDirectory> {
        let name = match &self.config.project_name {
            Some(raw) => ProjectName::parse(raw)?,
            None => {
                reporter.report(&Event::NamingProject);
                loop {
                    let raw = prompter.project_name()?;
                    match ProjectName::parse(&raw) {
                        Ok(name) => break name,
                        Err(e) => reporter.report(&Event::NameRejected(e)),
                    }
                }
            }
        };

        let target = TargetDirectory::resolve(&name, &self.cwd);
        reporter.report(&Event::TargetResolved(target.clone()));
        Ok(target)
    }

    /// Fetch the selected template into `target` in a single attempt.
    pub fn fetch(
        &self,
        selector: TemplateSelector,
        target: &TargetDirectory,
    ) -> std::result::Result<FetchReport, FetchError> {
        let source = TemplateSource::parse(selector.identifier())?;
        tracing::debug!(%source, target = %target.path().display(), "Fetching template");
        Ok(self.fetcher.fetch(&source, target.path())?)
    }
}
