//! Submission gating
//!
//! Decides whether a session may be submitted. Completeness is read from
//! [`Stats::is_complete`], the same predicate behind the `Incomplete`
//! verdict.

use crate::core::models::{HeaderField, InspectionHeader, Stats};

/// Required header fields that are blank, in display order
#[must_use]
pub fn missing_fields(header: &InspectionHeader) -> Vec<HeaderField> {
    HeaderField::REQUIRED
        .into_iter()
        .filter(|&field| header.get(field).trim().is_empty())
        .collect()
}

/// Every item answered and every required header field filled in
#[must_use]
pub fn can_submit(stats: &Stats, header: &InspectionHeader) -> bool {
    stats.is_complete() && missing_fields(header).is_empty()
}
