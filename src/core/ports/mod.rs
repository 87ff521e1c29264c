//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (catalogs, project files, storage backends).
//!
//! Implementations live in the `adapters` module.

mod checklist_repo;
mod record_store;
mod session_store;

pub use checklist_repo::ChecklistRepository;
pub use record_store::RecordStore;
pub use session_store::SessionStore;
