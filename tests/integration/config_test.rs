//! Integration tests for the config subcommands

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::mathpad;

#[test]
fn path_honors_env_override() {
    let dir = TempDir::new().unwrap();
    mathpad(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains(dir.path().to_string_lossy().as_ref()));
}

#[test]
fn show_prints_defaults_without_a_file() {
    let dir = TempDir::new().unwrap();
    mathpad(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ui]"))
        .stdout(predicate::str::contains("theme = \"default\""))
        .stdout(predicate::str::contains("[keypad]"));
}

#[test]
fn init_writes_file_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    mathpad(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(path.exists());

    std::fs::write(&path, "[ui]\ntheme = \"ocean\"\n").unwrap();
    mathpad(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert!(std::fs::read_to_string(&path).unwrap().contains("ocean"));

    mathpad(&dir).args(["config", "init", "--force"]).assert().success();
    assert!(std::fs::read_to_string(&path).unwrap().contains("default"));
}

#[test]
fn show_reports_invalid_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[ui\n").unwrap();
    mathpad(&dir)
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"));
}
