//! Integration tests for the inspecta CLI
//!
//! These tests run the binary against a scratch directory and walk through
//! real inspection workflows: start → mark → submit → history.

mod lifecycle_test;

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create an inspecta command isolated from the user's config
fn inspecta(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("inspecta"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// BASIC COMMANDS
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    inspecta(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("inspecta v"));
}

#[test]
fn test_init_creates_project_file() {
    let temp = TempDir::new().unwrap();
    inspecta(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert!(temp.path().join(".inspecta.toml").exists());
    assert!(temp.path().join(".inspecta").is_dir());

    inspecta(temp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_checklist_list_domains() {
    let temp = TempDir::new().unwrap();
    inspecta(temp.path())
        .args(["checklist", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ammonia"))
        .stdout(predicate::str::contains("compressed-gas"))
        .stdout(predicate::str::contains("ppe"));
}

#[test]
fn test_checklist_list_unknown_domain_fails() {
    let temp = TempDir::new().unwrap();
    inspecta(temp.path())
        .args(["checklist", "list", "scaffold"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No checklist defined for domain: scaffold"));
}

// =============================================================================
// ONE-SHOT SCORING
// =============================================================================

#[test]
fn test_score_partial_is_incomplete() {
    let temp = TempDir::new().unwrap();
    inspecta(temp.path())
        .args(["--json", "score", "ppe", "-s", "harness=pass", "-s", "gloves=fail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"verdict\": \"incomplete\""))
        .stdout(predicate::str::contains("\"completed\": 2"));
}

#[test]
fn test_score_from_file_with_project_checklist() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".inspecta.toml"),
        r#"[[checklist]]
domain = "ladder"

[[checklist.item]]
id = "rails"
label = "Side rails straight"
critical = true

[[checklist.item]]
id = "feet"
label = "Non-slip feet present"
"#,
    )
    .unwrap();
    fs::write(temp.path().join("statuses.json"), r#"{"rails": "pass", "feet": "n/a"}"#).unwrap();

    inspecta(temp.path())
        .args(["--json", "score", "ladder", "--from", "statuses.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"verdict\": \"pass\""));

    inspecta(temp.path())
        .args(["--json", "score", "ladder", "--from", "statuses.json", "-s", "rails=fail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"verdict\": \"fail\""))
        .stdout(predicate::str::contains("\"critical_failed\": 1"));
}

#[test]
fn test_score_rejects_bad_status() {
    let temp = TempDir::new().unwrap();
    inspecta(temp.path())
        .args(["score", "ppe", "-s", "harness=maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid status: maybe"));
}

// =============================================================================
// HISTORY
// =============================================================================

#[test]
fn test_history_empty() {
    let temp = TempDir::new().unwrap();
    inspecta(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No inspections recorded."));
}
