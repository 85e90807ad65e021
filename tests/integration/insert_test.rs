//! Integration tests for the insert command

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::mathpad;

fn insert_plain(args: &[&str]) -> String {
    let dir = TempDir::new().unwrap();
    let output = mathpad(&dir)
        .arg("insert")
        .args(args)
        .arg("--plain")
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim_end().to_string()
}

// ============================================================================
// Insertion Behavior
// ============================================================================

#[test]
fn inserts_at_collapsed_cursor() {
    assert_eq!(insert_plain(&["--value", "abcd", "--selection", "2", "XY"]), "abXYcd");
}

#[test]
fn replaces_selected_range() {
    assert_eq!(insert_plain(&["--value", "abcd", "--selection", "1:3", "X"]), "aXd");
}

#[test]
fn cursor_at_zero_inserts_at_start() {
    assert_eq!(insert_plain(&["--value", "xyz", "-s", "0", "A"]), "Axyz");
}

#[test]
fn appends_without_selection() {
    assert_eq!(insert_plain(&["--value", "abc", "tail"]), "abctail");
}

#[test]
fn text_starting_with_hyphen_is_inserted() {
    assert_eq!(insert_plain(&["--value", "5", "-s", "0", "-"]), "-5");
}

#[test]
fn json_output_describes_the_insertion() {
    let dir = TempDir::new().unwrap();
    let output = mathpad(&dir)
        .args(["insert", "--value", "abcd", "--selection", "1:3", "X"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    insta::assert_snapshot!(stdout.trim_end(), @r###"
    {
      "mode": "at_cursor",
      "value": "aXd",
      "cursor": 2,
      "focus_hint": 3
    }
    "###);
}

#[test]
fn json_output_for_append_has_null_cursor() {
    let dir = TempDir::new().unwrap();
    mathpad(&dir)
        .args(["insert", "--value", "1", "+2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"appended\""))
        .stdout(predicate::str::contains("\"cursor\": null"));
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn read_only_field_is_rejected() {
    let dir = TempDir::new().unwrap();
    mathpad(&dir)
        .args(["insert", "--value", "abc", "--read-only", "X"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn invalid_selection_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    mathpad(&dir)
        .args(["insert", "--selection", "one", "X"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid selection offset"));
}

#[test]
fn missing_text_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    mathpad(&dir)
        .arg("insert")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<TEXT>"));
}
