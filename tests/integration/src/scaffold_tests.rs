//! End-to-end tests for the scaffolding pipeline
//!
//! Each test runs the whole flow (template, name, target directory, fetch)
//! against real git repositories on the local disk.

use pretty_assertions::assert_eq;
use starter_core::testing::{LocalFetcher, RecordingReporter, ScriptedPrompter};
use starter_core::{
    ConfigResolver, ConflictResolution, Error, Event, Outcome, Overrides, RunConfig, Scaffolder,
    TemplateSelector,
};
use starter_fs::DirectoryState;
use starter_git::{FetchOptions, GitFetcher, TemplateFetcher, TemplateSource};
use starter_test_utils::{TemplateRepo, TestDir};

struct Templates {
    vanilla: TemplateRepo,
    git: TemplateRepo,
}

impl Templates {
    fn new() -> Self {
        Self {
            vanilla: TemplateRepo::with_files(&[
                ("index.html", "<h1>vanilla</h1>"),
                ("package.json", "{\"name\":\"vanilla\"}"),
                ("src/main.js", "console.log('vanilla')"),
            ]),
            git: TemplateRepo::with_files(&[
                ("index.html", "<h1>git</h1>"),
                ("package.json", "{\"name\":\"git\"}"),
                (".husky/pre-commit", "npx lint-staged"),
            ]),
        }
    }

    fn fetcher(&self) -> LocalFetcher {
        LocalFetcher::new()
            .route(TemplateSelector::Vanilla, self.vanilla.path())
            .route(TemplateSelector::AdvancedGit, self.git.path())
    }
}

fn config_for(overrides: &Overrides, workspace: &TestDir) -> RunConfig {
    ConfigResolver::with_config_dir(workspace.path("config"))
        .resolve(overrides)
        .unwrap()
}

#[test]
fn test_new_project_in_absent_directory() {
    let templates = Templates::new();
    let workspace = TestDir::new();
    let config = config_for(&Overrides::default(), &workspace);
    let scaffolder = Scaffolder::new(config, workspace.path("home"), templates.fetcher());
    let mut prompter = ScriptedPrompter::new()
        .template(TemplateSelector::Vanilla)
        .name("demo");
    let mut reporter = RecordingReporter::new();

    let outcome = scaffolder.run(&mut prompter, &mut reporter).unwrap();

    let Outcome::Created { target, .. } = &outcome else {
        panic!("expected a created project, got {outcome:?}");
    };
    assert_eq!(target.path(), workspace.path("home/demo"));
    assert_eq!(target.cd_hint(), Some("demo"));
    assert_eq!(prompter.conflict_prompts(), 0);
    assert_eq!(
        workspace.children("home/demo"),
        vec!["index.html", "package.json", "src"]
    );
    workspace.assert_missing("home/demo/.git");
}

#[test]
fn test_event_order_for_prompted_run() {
    let templates = Templates::new();
    let workspace = TestDir::new();
    let scaffolder = Scaffolder::new(RunConfig::default(), workspace.root(), templates.fetcher());
    let mut prompter = ScriptedPrompter::new()
        .template(TemplateSelector::AdvancedGit)
        .name("")
        .name("app");
    let mut reporter = RecordingReporter::new();

    scaffolder.run(&mut prompter, &mut reporter).unwrap();

    let kinds: Vec<&str> = reporter
        .events
        .iter()
        .map(|event| match event {
            Event::ChoosingTemplate => "choosing",
            Event::TemplateChosen { .. } => "chosen",
            Event::NamingProject => "naming",
            Event::NameRejected(_) => "rejected",
            Event::TargetResolved(_) => "resolved",
            Event::CheckingTarget => "checking",
            Event::TargetReady(_) => "ready",
            Event::TargetCleared(_) => "cleared",
            Event::TargetKept => "kept",
            Event::Downloading(_) => "downloading",
            Event::Downloaded(_) => "downloaded",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "choosing",
            "chosen",
            "naming",
            "rejected",
            "resolved",
            "checking",
            "ready",
            "downloading",
            "downloaded",
        ]
    );
}

#[test]
fn test_clear_current_directory_keeps_git() {
    let templates = Templates::new();
    let workspace = TestDir::new();
    workspace
        .write_file("demo/index.html", "stale")
        .write_file("demo/old/notes.md", "stale")
        .fake_git_dir("demo");
    let config = config_for(
        &Overrides {
            force_vanilla: true,
            project_name: Some(".".into()),
            ..Overrides::default()
        },
        &workspace,
    );
    let scaffolder = Scaffolder::new(config, workspace.path("demo"), templates.fetcher());
    let mut prompter = ScriptedPrompter::new().conflict(ConflictResolution::Clear);
    let mut reporter = RecordingReporter::new();

    let outcome = scaffolder.run(&mut prompter, &mut reporter).unwrap();

    assert!(matches!(outcome, Outcome::Created { ref target, .. } if target.cd_hint().is_none()));
    assert_eq!(prompter.template_prompts(), 0);
    assert_eq!(prompter.name_prompts(), 0);
    assert_eq!(prompter.conflict_prompts(), 1);
    assert_eq!(
        workspace.children("demo"),
        vec![".git", "index.html", "package.json", "src"]
    );
    assert_eq!(workspace.read("demo/index.html"), "<h1>vanilla</h1>");
    assert_eq!(workspace.read("demo/.git/HEAD"), "ref: refs/heads/main\n");
}

#[test]
fn test_empty_existing_directory_needs_no_decision() {
    let templates = Templates::new();
    let workspace = TestDir::new();
    workspace.create_dir("demo");
    let config = RunConfig {
        forced_template: Some(TemplateSelector::AdvancedGit),
        project_name: Some("demo".into()),
        ..RunConfig::default()
    };
    let scaffolder = Scaffolder::new(config, workspace.root(), templates.fetcher());
    let mut prompter = ScriptedPrompter::new();
    let mut reporter = RecordingReporter::new();

    scaffolder.run(&mut prompter, &mut reporter).unwrap();

    assert_eq!(prompter.conflict_prompts(), 0);
    assert!(reporter.saw(|e| *e == Event::TargetReady(DirectoryState::EmptyExisting)));
    assert_eq!(workspace.read("demo/.husky/pre-commit"), "npx lint-staged");
}

#[test]
fn test_cancel_leaves_directory_untouched() {
    let templates = Templates::new();
    let workspace = TestDir::new();
    workspace.write_file("demo/keep.txt", "mine").fake_git_dir("demo");
    let config = RunConfig {
        forced_template: Some(TemplateSelector::Vanilla),
        project_name: Some("demo".into()),
        ..RunConfig::default()
    };
    let fetcher = templates.fetcher();
    let scaffolder = Scaffolder::new(config, workspace.root(), fetcher);
    let mut prompter = ScriptedPrompter::new().conflict(ConflictResolution::Cancel);

    let outcome = scaffolder
        .run(&mut prompter, &mut RecordingReporter::new())
        .unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(workspace.children("demo"), vec![".git", "keep.txt"]);
    assert_eq!(workspace.read("demo/keep.txt"), "mine");
}

#[test]
fn test_dismissed_conflict_prompt_cancels() {
    let templates = Templates::new();
    let workspace = TestDir::new();
    workspace.write_file("demo/keep.txt", "mine");
    let config = RunConfig {
        forced_template: Some(TemplateSelector::Vanilla),
        project_name: Some("demo".into()),
        ..RunConfig::default()
    };
    let scaffolder = Scaffolder::new(config, workspace.root(), templates.fetcher());

    let outcome = scaffolder
        .run(&mut ScriptedPrompter::new(), &mut RecordingReporter::new())
        .unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(workspace.children("demo"), vec!["keep.txt"]);
}

#[test]
fn test_keep_overwrites_template_files_only() {
    let templates = Templates::new();
    let workspace = TestDir::new();
    workspace
        .write_file("demo/index.html", "mine")
        .write_file("demo/README.md", "notes");
    let config = RunConfig {
        forced_template: Some(TemplateSelector::Vanilla),
        project_name: Some("demo".into()),
        ..RunConfig::default()
    };
    let scaffolder = Scaffolder::new(config, workspace.root(), templates.fetcher());
    let mut prompter = ScriptedPrompter::new().conflict(ConflictResolution::Keep);

    scaffolder
        .run(&mut prompter, &mut RecordingReporter::new())
        .unwrap();

    assert_eq!(workspace.read("demo/index.html"), "<h1>vanilla</h1>");
    assert_eq!(workspace.read("demo/README.md"), "notes");
}

#[test]
fn test_failing_fetch_reports_no_success() {
    let workspace = TestDir::new();
    let config = RunConfig {
        forced_template: Some(TemplateSelector::Vanilla),
        project_name: Some("demo".into()),
        ..RunConfig::default()
    };
    let scaffolder = Scaffolder::new(config, workspace.root(), LocalFetcher::new());
    let mut reporter = RecordingReporter::new();

    let err = scaffolder
        .run(&mut ScriptedPrompter::new(), &mut reporter)
        .unwrap_err();

    assert!(matches!(err, Error::Fetch(_)));
    assert!(err.to_string().starts_with("Failed to clone template: "));
    assert!(reporter.saw(|e| matches!(e, Event::Downloading(_))));
    assert!(!reporter.saw(|e| matches!(e, Event::Downloaded(_))));
}

#[test]
fn test_git_fetcher_checks_out_tagged_revision() {
    let template = TemplateRepo::with_files(&[("index.html", "v1")]);
    template.tag("v1");
    template.commit(&[("index.html", "v2")], "Second release");
    let workspace = TestDir::new();

    let source = TemplateSource::parse(&format!("file://{}#v1", template.identifier())).unwrap();
    let report = GitFetcher::new(FetchOptions::default())
        .fetch(&source, &workspace.path("demo"))
        .unwrap();

    assert_eq!(report.destination, workspace.path("demo"));
    assert_eq!(workspace.read("demo/index.html"), "v1");
}
