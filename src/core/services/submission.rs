//! Submission service - turns a finished session into a record
//!
//! [`finalize`] is pure: the caller supplies the record sequence number.
//! [`commit_submission`] persists the result through the store ports.

use log::warn;
use thiserror::Error;

use crate::core::models::{
    Checklist, HeaderField, InspectionDomain, InspectionRecord, InspectionSession, RecordResult,
};

use crate::core::ports::{RecordStore, SessionStore};

use super::gating::missing_fields;
use super::scoring::{ScoringPolicy, failed_items};

/// Reasons a session cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Some items are unanswered
    #[error("inspection incomplete: {completed} of {total} items answered")]
    Incomplete {
        /// Items answered
        completed: usize,
        /// Items on the checklist
        total: usize,
    },

    /// Required header fields are blank
    #[error("missing required fields: {}", join(.0))]
    MissingFields(Vec<HeaderField>),

    /// The session was started for a different checklist
    #[error("session is for {session} but checklist is for {checklist}")]
    DomainMismatch {
        /// Domain of the session
        session: InspectionDomain,
        /// Domain of the checklist
        checklist: InspectionDomain,
    },
}

fn join(fields: &[HeaderField]) -> String {
    fields.iter().map(|f| f.name()).collect::<Vec<_>>().join(", ")
}

/// Finalize a session into a record
///
/// The session is consumed whether or not submission succeeds; callers that
/// want to retry keep their own copy.
pub fn finalize(
    session: InspectionSession,
    checklist: &Checklist,
    policy: &ScoringPolicy,
    sequence: u32,
) -> Result<InspectionRecord, SubmitError> {
    if session.domain != *checklist.domain() {
        return Err(SubmitError::DomainMismatch {
            session: session.domain,
            checklist: checklist.domain().clone(),
        });
    }

    let card = policy.score(checklist.items(), &session.statuses);

    let Some(result) = RecordResult::from_verdict(card.verdict) else {
        return Err(SubmitError::Incomplete {
            completed: card.stats.completed,
            total: card.stats.total,
        });
    };

    let missing = missing_fields(&session.header);
    if !missing.is_empty() {
        return Err(SubmitError::MissingFields(missing));
    }

    Ok(InspectionRecord {
        id: format!("INS-{sequence}"),
        domain: session.domain,
        result,
        stats: card.stats,
        failed_items: failed_items(checklist.items(), &session.statuses),
        header: session.header,
        submitted_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// Move a finalized inspection from the session store into the record store
///
/// The session is cleared before the record is appended, so a leftover
/// session can never be submitted twice. If the append fails, `session` is
/// saved back and the append error is returned.
///
/// # Errors
///
/// Returns an error if the session cannot be cleared or the record cannot be
/// appended.
pub fn commit_submission(
    records: &dyn RecordStore,
    sessions: &dyn SessionStore,
    session: &InspectionSession,
    record: &InspectionRecord,
) -> anyhow::Result<()> {
    sessions.clear()?;
    if let Err(e) = records.append(record) {
        if let Err(restore) = sessions.save(session) {
            warn!("could not restore the {} session: {restore:#}", session.domain);
        }
        return Err(e);
    }
    Ok(())
}
