//! Integration tests for help, version and completions

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::mathpad;

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    mathpad(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("insert"))
        .stdout(predicate::str::contains("pad"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_includes_package_version() {
    let dir = TempDir::new().unwrap();
    mathpad(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn bash_completions_mention_binary() {
    let dir = TempDir::new().unwrap();
    mathpad(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mathpad"));
}

#[test]
fn pad_refuses_non_interactive_terminal() {
    let dir = TempDir::new().unwrap();
    mathpad(&dir)
        .arg("pad")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("interactive terminal"));
}
