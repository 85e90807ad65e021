//! Shared helpers for integration tests

use assert_cmd::Command;
use tempfile::TempDir;

/// A `mathpad` command isolated from the user's config and colors.
pub fn mathpad(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mathpad").expect("binary should be built");
    cmd.env("MATHPAD_CONFIG", config_dir.path().join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("MATHPAD_LOG");
    cmd
}
