//! Terminal rendering of progress and results
//!
//! Rendering produces lines; printing is kept at the edges so the wording can
//! be tested without a terminal.

use colored::Colorize;
use starter_core::{Event, PromptStyle, Reporter, TargetDirectory};
use starter_fs::DirectoryState;

const GUTTER: &str = "┃";

/// Print the boxed logo shown before a banner-style run.
pub fn print_logo(style: PromptStyle) {
    if style != PromptStyle::Banner {
        return;
    }
    println!();
    println!("{}", "╭───────────────────────────────────────╮".cyan());
    println!(
        "{}{}{}",
        "│".cyan(),
        "     Vite Template JS Starter CLI      ".blue().bold(),
        "│".cyan()
    );
    println!("{}", "╰───────────────────────────────────────╯".cyan());
    println!();
    println!("{}", GUTTER.cyan());
}

/// A [`Reporter`] printing to stdout.
#[derive(Debug, Clone, Copy)]
pub struct TerminalReporter {
    style: PromptStyle,
}

impl TerminalReporter {
    pub fn new(style: PromptStyle) -> Self {
        Self { style }
    }

    /// Lines printed for `event`, possibly none.
    pub fn render(&self, event: &Event) -> Vec<String> {
        match self.style {
            PromptStyle::Banner => render_banner(event),
            PromptStyle::Plain => render_plain(event),
        }
    }
}

impl Reporter for TerminalReporter {
    fn report(&mut self, event: &Event) {
        for line in self.render(event) {
            println!("{line}");
        }
    }
}

fn step(label: &str, text: &str) -> String {
    format!("{} {} {}", GUTTER, format!("◉ {label} →").bold(), text)
        .cyan()
        .to_string()
}

fn note(text: &str) -> String {
    format!("{} {}", GUTTER, text.green()).cyan().to_string()
}

fn gutter() -> String {
    GUTTER.cyan().to_string()
}

fn render_banner(event: &Event) -> Vec<String> {
    match event {
        Event::ChoosingTemplate => vec![step("Step 1", "Choose a template:")],
        Event::TemplateChosen {
            selector,
            forced: true,
        } => vec![
            step(
                "Step 1",
                &format!(
                    "Skipping prompt, using {} template (--{})",
                    selector.description(),
                    selector.flag()
                ),
            ),
            gutter(),
        ],
        Event::TemplateChosen { selector, .. } => vec![
            note(&format!("You selected the {} template", selector.description())),
            gutter(),
        ],
        Event::NamingProject => vec![step(
            "Step 2",
            "Name your project (or \".\" to use current directory):",
        )],
        Event::NameRejected(e) => vec![format!("{} {}", GUTTER.cyan(), e.to_string().yellow())],
        Event::TargetResolved(target) => vec![
            note(&format!(
                "Project will be created in: {}",
                target.path().display()
            )),
            gutter(),
        ],
        Event::CheckingTarget => vec![step("Step 3", "Checking target directory...")],
        Event::TargetReady(_) => vec![note("Target directory is empty. Proceeding..."), gutter()],
        Event::TargetCleared(_) => vec!["🧹 Cleared directory.".to_string()],
        Event::TargetKept => vec![note("Keeping existing files.")],
        Event::Downloading(target) => vec![step(
            "Step 4",
            &format!("Downloading template into \"{}\"...", target.display_name()),
        )],
        Event::Downloaded(report) => vec![note(&format!(
            "Template cloned successfully to: {}",
            report.destination.display()
        ))],
    }
}

fn render_plain(event: &Event) -> Vec<String> {
    match event {
        Event::ChoosingTemplate | Event::NamingProject | Event::CheckingTarget => Vec::new(),
        Event::TemplateChosen {
            selector,
            forced: true,
        } => vec![format!(
            "Using the {} template (--{})",
            selector.description(),
            selector.flag()
        )],
        Event::TemplateChosen { selector, .. } => {
            vec![format!("Template: {}", selector.description())]
        }
        Event::NameRejected(e) => vec![e.to_string().yellow().to_string()],
        Event::TargetResolved(target) => {
            vec![format!("Target directory: {}", target.path().display())]
        }
        Event::TargetReady(DirectoryState::Absent) => vec!["Creating a new directory.".to_string()],
        Event::TargetReady(state) => vec![format!("Target directory is {state}.")],
        Event::TargetCleared(report) => vec![format!(
            "Removed {} entries ({} kept).",
            report.removed.len(),
            report.preserved.len()
        )],
        Event::TargetKept => vec!["Keeping existing files.".to_string()],
        Event::Downloading(target) => vec![format!(
            "Downloading template into \"{}\"...",
            target.display_name()
        )],
        Event::Downloaded(report) => vec![format!(
            "{} {} files written to {}",
            "Done.".green(),
            report.files_written,
            report.destination.display()
        )],
    }
}

/// Commands the user runs next, preceded by the style's heading.
pub fn final_instructions(style: PromptStyle, target: &TargetDirectory) -> Vec<String> {
    let mut lines = match style {
        PromptStyle::Banner => vec![
            gutter(),
            step("Final step", "Run the following commands:"),
        ],
        PromptStyle::Plain => vec!["Now run:".bold().to_string()],
    };
    lines.push(String::new());
    if let Some(name) = target.cd_hint() {
        lines.push(format!("  cd {name}"));
    }
    lines.push("  npm install".to_string());
    lines.push("  npm run start".to_string());
    lines.push(String::new());
    lines
}

pub fn cancelled_message(style: PromptStyle) -> &'static str {
    match style {
        PromptStyle::Banner => "🚫 Operation cancelled.",
        PromptStyle::Plain => "Operation cancelled.",
    }
}
