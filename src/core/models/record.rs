//! Inspection record model
//!
//! The finalized outcome of a submitted session. Records are written once
//! and only ever read afterwards.

use serde::{Deserialize, Serialize};

use super::{InspectionDomain, InspectionHeader, Stats, Verdict};

/// Final result stored on a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordResult {
    /// Inspection passed
    Pass,
    /// Inspection failed
    Fail,
}

impl RecordResult {
    /// Map a final verdict; `Incomplete` has no record result
    #[must_use]
    pub const fn from_verdict(verdict: Verdict) -> Option<Self> {
        match verdict {
            Verdict::Pass => Some(Self::Pass),
            Verdict::Fail => Some(Self::Fail),
            Verdict::Incomplete => None,
        }
    }
}

impl std::fmt::Display for RecordResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// A submitted inspection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionRecord {
    /// Record identifier (e.g., "INS-12")
    pub id: String,

    /// Domain that was inspected
    pub domain: InspectionDomain,

    /// Pass or fail
    pub result: RecordResult,

    /// Counters at the time of submission
    pub stats: Stats,

    /// Ids of failed items, in checklist order
    #[serde(default)]
    pub failed_items: Vec<String>,

    /// Identifying fields
    pub header: InspectionHeader,

    /// When the record was produced (RFC 3339)
    pub submitted_at: String,
}

impl InspectionRecord {
    /// Number of failed items
    #[must_use]
    pub const fn failed_count(&self) -> usize {
        self.stats.failed
    }

    /// Number of failed critical items
    #[must_use]
    pub const fn critical_failed_count(&self) -> usize {
        self.stats.critical_failed
    }
}
