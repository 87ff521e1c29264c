//! Session store port
//!
//! Holds the single active inspection between CLI invocations.

use super::super::models::InspectionSession;

/// Storage for the active session
pub trait SessionStore: Send + Sync {
    /// The active session, if one was started
    fn load(&self) -> anyhow::Result<Option<InspectionSession>>;

    /// Replace the active session
    fn save(&self, session: &InspectionSession) -> anyhow::Result<()>;

    /// Discard the active session (no-op when there is none)
    fn clear(&self) -> anyhow::Result<()>;
}
