//! Check status values
//!
//! The verdict an operator records against a single checklist item.
//! "Not yet answered" is not a status: it is the absence of an entry in a
//! [`StatusMap`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recorded statuses keyed by checklist item id
///
/// An item is answered exactly when its id is a key. Inserting a new status
/// for an existing key replaces the old one.
pub type StatusMap = BTreeMap<String, CheckStatus>;

/// Error returned when a command-line value (status, header field) cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value}. Use: {expected}")]
pub struct ParseValueError {
    /// What was being parsed ("status", "field", ...)
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
    /// Accepted spellings, for the error message
    pub expected: &'static str,
}

/// Status recorded for one checklist item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Condition satisfied
    Pass,
    /// Condition not satisfied
    Fail,
    /// Not applicable to this equipment
    Na,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Fail => write!(f, "fail"),
            Self::Na => write!(f, "na"),
        }
    }
}

impl std::str::FromStr for CheckStatus {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pass" | "ok" => Ok(Self::Pass),
            "fail" => Ok(Self::Fail),
            "na" | "n/a" | "not-applicable" => Ok(Self::Na),
            _ => Err(ParseValueError {
                kind: "status",
                value: s.to_string(),
                expected: "pass, fail, na",
            }),
        }
    }
}
