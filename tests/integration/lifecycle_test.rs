//! Session lifecycle tests
//!
//! Start a session, answer every item, submit, and read the history back.

use predicates::prelude::*;
use tempfile::TempDir;

use super::inspecta;

const COMPRESSED_GAS: [&str; 10] = [
    "secured",
    "segregation",
    "storage-area",
    "empties",
    "caps",
    "labels",
    "regulators",
    "hoses",
    "flashback",
    "signage",
];

fn start_gas_session(dir: &std::path::Path) {
    inspecta(dir)
        .args([
            "session",
            "start",
            "compressed-gas",
            "--equipment",
            "CYL-RACK-2",
            "--location",
            "Weld shop",
            "--inspector",
            "T. Ruiz",
            "--date",
            "2026-10-19",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Started compressed-gas inspection (10 items, 3 critical)"));
}

fn mark(dir: &std::path::Path, id: &str, status: &str) {
    inspecta(dir).args(["session", "mark", id, status]).assert().success();
}

#[test]
fn test_full_session_passes_and_is_recorded() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    start_gas_session(dir);

    for id in COMPRESSED_GAS {
        mark(dir, id, "pass");
    }
    mark(dir, "caps", "fail");
    mark(dir, "labels", "fail");

    inspecta(dir)
        .args(["session", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress: 10/10 (100%)"))
        .stdout(predicate::str::contains("Ready to submit"));

    inspecta(dir)
        .args(["session", "submit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Submitted INS-1 (compressed-gas)"))
        .stdout(predicate::str::contains("Failed items: caps, labels"));

    inspecta(dir)
        .args(["session", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No active session"));

    inspecta(dir)
        .args(["--json", "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"INS-1\""))
        .stdout(predicate::str::contains("\"result\": \"pass\""));
}

#[test]
fn test_critical_failure_is_recorded_as_fail() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    start_gas_session(dir);

    for id in COMPRESSED_GAS {
        mark(dir, id, "pass");
    }
    mark(dir, "flashback", "fail");

    inspecta(dir).args(["session", "submit"]).assert().success();

    inspecta(dir)
        .args(["history", "--failed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INS-1"));

    inspecta(dir)
        .args(["history", "--domain", "ppe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No inspections recorded."));
}

#[test]
fn test_incomplete_session_cannot_submit() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    start_gas_session(dir);
    mark(dir, "secured", "pass");

    inspecta(dir)
        .args(["session", "submit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("inspection incomplete: 1 of 10 items answered"));

    // Session is kept after a refused submit
    inspecta(dir)
        .args(["--json", "session", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"can_submit\": false"));
}

#[test]
fn test_missing_field_blocks_submit_until_set() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    inspecta(dir)
        .args(["session", "start", "compressed-gas", "--equipment", "CYL-9", "--inspector", "T. Ruiz"])
        .assert()
        .success();
    for id in COMPRESSED_GAS {
        mark(dir, id, "na");
    }

    inspecta(dir)
        .args(["session", "submit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required fields: location"));

    inspecta(dir)
        .args(["session", "set", "location", "Yard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("location: Yard"));

    inspecta(dir).args(["session", "submit"]).assert().success();
}

#[test]
fn test_mark_rejects_unknown_item() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    start_gas_session(dir);

    inspecta(dir)
        .args(["session", "mark", "harness", "pass"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown item 'harness'"));
}

#[test]
fn test_remark_overwrites_and_unmark_clears() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    start_gas_session(dir);

    mark(dir, "hoses", "pass");
    inspecta(dir)
        .args(["session", "mark", "hoses", "fail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hoses: fail (was pass)  [1/10 answered]"));

    inspecta(dir)
        .args(["session", "unmark", "hoses"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hoses: cleared (was fail)"));
}

#[test]
fn test_second_start_requires_force() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    start_gas_session(dir);

    inspecta(dir)
        .args(["session", "start", "ppe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already active"));

    inspecta(dir).args(["session", "start", "ppe", "--force"]).assert().success();
    inspecta(dir)
        .args(["session", "discard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Discarded ppe session."));
}

#[test]
fn test_configured_inspector_fills_header() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    // XDG location on Linux, platform location on macOS
    for config_dir in [dir.join(".config/inspecta"), dir.join("Library/Application Support/inspecta")] {
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "[inspector]\nname = \"D. Ibsen\"\n").unwrap();
    }

    inspecta(dir).args(["session", "start", "ammonia"]).assert().success();

    inspecta(dir)
        .args(["--json", "session", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"inspector\": \"D. Ibsen\""));
}

#[test]
fn test_dates_must_be_iso() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    inspecta(dir)
        .args(["session", "start", "ppe", "--date", "19/10/2026"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date: 19/10/2026. Use YYYY-MM-DD"));

    start_gas_session(dir);
    inspecta(dir)
        .args(["session", "set", "date", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date: yesterday"));

    inspecta(dir)
        .args(["session", "set", "date", "2026-10-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("date: 2026-10-20"));
}
