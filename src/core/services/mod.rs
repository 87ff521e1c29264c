//! Business logic services
//!
//! Orchestration logic that operates on domain models.
//! These services do no I/O of their own - they operate on data passed in,
//! and reach storage only through the port traits.
//!
//! - [`scoring`] - Count statuses and classify the inspection
//! - [`gating`] - Decide whether a session may be submitted
//! - [`submission`] - Turn a finished session into a record

pub mod gating;
pub mod scoring;
pub mod submission;

pub use gating::{can_submit, missing_fields};
pub use scoring::{
    DEFAULT_MAX_FAILURES, Scorecard, ScoringPolicy, compute_stats, compute_verdict, failed_items,
};
pub use submission::{SubmitError, commit_submission, finalize};
