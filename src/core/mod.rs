//! Core domain logic for inspecta
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Checklist, Session, Record, Stats, Verdict)
//! - `services/` - Scoring, gating and submission
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
