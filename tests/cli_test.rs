//! Integration tests for CLI argument parsing.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("armory"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("security tool provisioning"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("armory"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_lists_profiles() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("armory"));
    cmd.arg("--list-profiles");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bug-bounty"))
        .stdout(predicate::str::contains("full-pentest"));
    Ok(())
}

#[test]
fn cli_rejects_unknown_profile() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("armory"));
    cmd.args(["--profile", "no-such-profile", "--dry-run", "--yes"])
        .arg("--log-file")
        .arg(temp.path().join("session.log"));
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown profile"));
    Ok(())
}

#[test]
fn cli_rejects_conflicting_verbosity() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("armory"));
    cmd.args(["--verbose", "--quiet"]);
    cmd.assert().failure();
    Ok(())
}
