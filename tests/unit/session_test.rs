//! Tests for session lifecycle, gating and submission

use inspecta::adapters::builtin::BuiltinChecklists;
use inspecta::adapters::file::{FileRecordStore, FileSessionStore};
use inspecta::core::models::{
    CheckStatus, Checklist, HeaderField, InspectionDomain, InspectionHeader, InspectionRecord,
    InspectionSession, RecordResult,
};
use inspecta::core::ports::{ChecklistRepository, RecordStore, SessionStore};
use inspecta::core::services::{
    ScoringPolicy, SubmitError, can_submit, commit_submission, compute_stats, finalize,
    missing_fields,
};
use tempfile::TempDir;

use crate::common::full_header;

fn ammonia_session() -> InspectionSession {
    InspectionSession::new(InspectionDomain::Ammonia, full_header())
}

#[test]
fn submit_gate_tracks_completion() {
    let checklist = BuiltinChecklists.require(&InspectionDomain::Ammonia).unwrap();
    let mut session = ammonia_session();

    for (i, item) in checklist.items().iter().enumerate() {
        let stats = compute_stats(checklist.items(), &session.statuses);
        assert!(!can_submit(&stats, &session.header), "gate open after {i} items");
        session.set_status(item.id.clone(), CheckStatus::Pass);
    }

    let stats = compute_stats(checklist.items(), &session.statuses);
    assert!(can_submit(&stats, &session.header));
}

#[test]
fn blank_header_blocks_submission() {
    let header = InspectionHeader::default();
    assert_eq!(missing_fields(&header), HeaderField::REQUIRED.to_vec());
}

#[test]
fn passing_inspection_produces_pass_record() {
    let checklist = BuiltinChecklists.require(&InspectionDomain::CompressedGas).unwrap();
    let mut session = InspectionSession::new(InspectionDomain::CompressedGas, full_header());
    for item in checklist.items() {
        session.set_status(item.id.clone(), CheckStatus::Pass);
    }
    session.set_status("caps", CheckStatus::Fail);
    session.set_status("labels", CheckStatus::Na);

    let record = finalize(session, &checklist, &ScoringPolicy::default(), 3).unwrap();
    assert_eq!(record.id, "INS-3");
    assert_eq!(record.result, RecordResult::Pass);
    assert_eq!(record.failed_count(), 1);
    assert_eq!(record.failed_items, vec!["caps".to_string()]);
    assert_eq!(record.stats.not_applicable, 1);
}

#[test]
fn stricter_domain_policy_fails_record() {
    let checklist = BuiltinChecklists.require(&InspectionDomain::CompressedGas).unwrap();
    let mut session = InspectionSession::new(InspectionDomain::CompressedGas, full_header());
    for item in checklist.items() {
        session.set_status(item.id.clone(), CheckStatus::Pass);
    }
    session.set_status("caps", CheckStatus::Fail);

    let record = finalize(session, &checklist, &ScoringPolicy::with_max_failures(0), 1).unwrap();
    assert_eq!(record.result, RecordResult::Fail);
}

#[test]
fn incomplete_session_cannot_be_finalized() {
    let checklist = BuiltinChecklists.require(&InspectionDomain::Ammonia).unwrap();
    let mut session = ammonia_session();
    session.set_status("leaks", CheckStatus::Fail);

    let err = finalize(session, &checklist, &ScoringPolicy::default(), 1).unwrap_err();
    assert_eq!(
        err,
        SubmitError::Incomplete {
            completed: 1,
            total: checklist.len()
        }
    );
}

#[test]
fn reset_keeps_header() {
    let mut session = ammonia_session();
    session.set_status("leaks", CheckStatus::Pass);
    session.reset();
    assert!(session.statuses.is_empty());
    assert_eq!(session.header, full_header());
}

/// Record store whose disk is always full
struct FullRecordStore;

impl RecordStore for FullRecordStore {
    fn append(&self, _record: &InspectionRecord) -> anyhow::Result<()> {
        anyhow::bail!("no space left on device")
    }

    fn list(&self) -> anyhow::Result<Vec<InspectionRecord>> {
        Ok(Vec::new())
    }
}

fn answered_session(checklist: &Checklist) -> InspectionSession {
    let mut session = ammonia_session();
    for item in checklist.items() {
        session.set_status(item.id.clone(), CheckStatus::Pass);
    }
    session
}

#[test]
fn commit_moves_session_into_history() {
    let dir = TempDir::new().unwrap();
    let records = FileRecordStore::in_dir(dir.path());
    let sessions = FileSessionStore::in_dir(dir.path());
    let checklist = BuiltinChecklists.require(&InspectionDomain::Ammonia).unwrap();
    let session = answered_session(&checklist);
    sessions.save(&session).unwrap();

    let record = finalize(session.clone(), &checklist, &ScoringPolicy::default(), 1).unwrap();
    commit_submission(&records, &sessions, &session, &record).unwrap();

    assert_eq!(sessions.load().unwrap(), None);
    assert_eq!(records.list().unwrap(), vec![record]);
}

#[test]
fn failed_append_restores_session() {
    let dir = TempDir::new().unwrap();
    let sessions = FileSessionStore::in_dir(dir.path());
    let checklist = BuiltinChecklists.require(&InspectionDomain::Ammonia).unwrap();
    let session = answered_session(&checklist);
    sessions.save(&session).unwrap();

    let record = finalize(session.clone(), &checklist, &ScoringPolicy::default(), 1).unwrap();
    let err = commit_submission(&FullRecordStore, &sessions, &session, &record).unwrap_err();

    assert!(err.to_string().contains("no space left"));
    assert_eq!(sessions.load().unwrap(), Some(session));
}
