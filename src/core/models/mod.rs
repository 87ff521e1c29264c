//! Domain models for inspecta
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Checklist`] / [`ChecklistItem`] - "What must be inspected"
//! - [`CheckStatus`] / [`StatusMap`] - "What the operator recorded"
//! - [`Stats`] / [`Verdict`] - "Where the inspection stands"
//! - [`InspectionSession`] - An inspection in progress
//! - [`InspectionRecord`] - A submitted inspection

mod check_status;
mod checklist;
mod domain;
mod record;
mod session;
mod stats;

pub use check_status::{CheckStatus, ParseValueError, StatusMap};
pub use checklist::{Checklist, ChecklistError, ChecklistItem};
pub use domain::InspectionDomain;
pub use record::{InspectionRecord, RecordResult};
pub use session::{HeaderField, InspectionHeader, InspectionSession};
pub use stats::{Stats, Verdict};
