//! CLI end-to-end tests that invoke the compiled `vite-starter` binary.
//!
//! Only paths that finish before any network access are exercised here; the
//! full pipeline is covered by the integration crate against local
//! repositories.

use assert_cmd::Command;
use predicates::prelude::*;
use starter_test_utils::TestDir;

fn vite_starter() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vite-starter"));
    cmd.env_remove("VITE_STARTER_STYLE")
        .env_remove("VITE_STARTER_CONFIG");
    cmd
}

#[test]
fn test_help_exits_zero() {
    vite_starter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--git"))
        .stdout(predicate::str::contains("--vanilla"))
        .stdout(predicate::str::contains("--style"));
}

#[test]
fn test_version_prints_package_version() {
    vite_starter()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_style_fails() {
    vite_starter()
        .args(["--style", "fancy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fancy"));
}

#[test]
fn test_blank_name_exits_one() {
    let dir = TestDir::new();
    vite_starter()
        .current_dir(dir.root())
        .args(["   ", "--vanilla", "--style", "plain"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please enter a project name."));
    assert!(dir.children(".").is_empty());
}

#[test]
fn test_missing_config_file_exits_one() {
    let dir = TestDir::new();
    vite_starter()
        .current_dir(dir.root())
        .args(["demo", "--vanilla"])
        .env("VITE_STARTER_CONFIG", dir.path("missing.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("file not found"));
    assert!(dir.children(".").is_empty());
}

#[test]
fn test_invalid_config_file_exits_one() {
    let dir = TestDir::new();
    dir.write_file("starter.toml", "[ui]\nstyle = \"neon\"\n");
    vite_starter()
        .current_dir(dir.root())
        .args(["demo", "--vanilla", "--config"])
        .arg(dir.path("starter.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
    assert!(!dir.path("demo").exists());
}
