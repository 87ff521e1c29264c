//! Record store port
//!
//! Defines the interface for persisting submitted inspections.

use super::super::models::InspectionRecord;

/// Append-only history of submitted inspections
pub trait RecordStore: Send + Sync {
    /// Persist a record
    fn append(&self, record: &InspectionRecord) -> anyhow::Result<()>;

    /// All records, oldest first
    fn list(&self) -> anyhow::Result<Vec<InspectionRecord>>;

    /// Sequence number for the next record
    ///
    /// # Errors
    ///
    /// Fails when the history cannot be read or the highest id is already
    /// `u32::MAX`.
    fn next_sequence(&self) -> anyhow::Result<u32> {
        let max = self
            .list()?
            .iter()
            .filter_map(|r| r.id.strip_prefix("INS-").and_then(|n| n.parse::<u32>().ok()))
            .max()
            .unwrap_or(0);
        max.checked_add(1)
            .ok_or_else(|| anyhow::anyhow!("record sequence exhausted (last id INS-{max})"))
    }
}
