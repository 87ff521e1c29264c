//! File-based inspection storage
//!
//! Implements `RecordStore` and `SessionStore` using JSON files under
//! `.inspecta/`.

mod records;
mod session;

pub use records::FileRecordStore;
pub use session::FileSessionStore;
