//! Tests for file-backed record and session storage

use inspecta::adapters::builtin::BuiltinChecklists;
use inspecta::adapters::file::{FileRecordStore, FileSessionStore};
use inspecta::core::models::{CheckStatus, InspectionDomain, InspectionSession, RecordResult};
use inspecta::core::ports::{ChecklistRepository, RecordStore, SessionStore};
use inspecta::core::services::{ScoringPolicy, finalize};
use inspecta::paths;
use tempfile::TempDir;

use crate::common::full_header;

#[test]
fn session_survives_reload_then_submits() {
    let dir = TempDir::new().unwrap();
    let state = paths::state_dir(dir.path());
    let sessions = FileSessionStore::in_dir(&state);
    let records = FileRecordStore::in_dir(&state);

    let checklist = BuiltinChecklists.require(&InspectionDomain::Ppe).unwrap();
    let mut session = InspectionSession::new(InspectionDomain::Ppe, full_header());
    for item in checklist.items() {
        session.set_status(item.id.clone(), CheckStatus::Pass);
        sessions.save(&session).unwrap();
    }
    session.set_status("harness", CheckStatus::Fail);
    sessions.save(&session).unwrap();

    let reloaded = sessions.load().unwrap().unwrap();
    assert_eq!(reloaded.status("harness"), Some(CheckStatus::Fail));

    let sequence = records.next_sequence().unwrap();
    let record = finalize(reloaded, &checklist, &ScoringPolicy::default(), sequence).unwrap();
    records.append(&record).unwrap();
    sessions.clear().unwrap();

    assert!(sessions.load().unwrap().is_none());
    let history = records.list().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].result, RecordResult::Fail);
    assert_eq!(history[0].failed_items, vec!["harness".to_string()]);
    assert_eq!(records.next_sequence().unwrap(), 2);
}

#[test]
fn records_are_plain_json() {
    let dir = TempDir::new().unwrap();
    let records = FileRecordStore::in_dir(dir.path());
    let checklist = BuiltinChecklists.require(&InspectionDomain::Ammonia).unwrap();
    let mut session = InspectionSession::new(InspectionDomain::Ammonia, full_header());
    for item in checklist.items() {
        session.set_status(item.id.clone(), CheckStatus::Na);
    }
    let record = finalize(session, &checklist, &ScoringPolicy::default(), 1).unwrap();
    records.append(&record).unwrap();

    let raw = std::fs::read_to_string(records.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["id"], "INS-1");
    assert_eq!(json[0]["domain"], "ammonia");
    assert_eq!(json[0]["result"], "pass");
}
