//! JSON record history
//!
//! All records live in one pretty-printed JSON array, rewritten on append.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;

use crate::core::models::InspectionRecord;
use crate::core::ports::RecordStore;
use crate::paths::RECORDS_FILE;

/// Record store backed by `<state dir>/records.json`
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    path: PathBuf,
}

impl FileRecordStore {
    /// Store rooted at a state directory
    #[must_use]
    pub fn in_dir(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(RECORDS_FILE),
        }
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for FileRecordStore {
    fn append(&self, record: &InspectionRecord) -> anyhow::Result<()> {
        let mut records = self.list()?;
        records.push(record.clone());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        debug!("appended {} to {}", record.id, self.path.display());
        Ok(())
    }

    fn list(&self) -> anyhow::Result<Vec<InspectionRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("corrupt record file {}", self.path.display()))
    }
}
