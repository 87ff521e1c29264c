//! JSON session file
//!
//! The active session is staged in `<state dir>/session.json` until it is
//! submitted or discarded.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;

use crate::core::models::InspectionSession;
use crate::core::ports::SessionStore;
use crate::paths::SESSION_FILE;

/// Session store backed by `<state dir>/session.json`
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store rooted at a state directory
    #[must_use]
    pub fn in_dir(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(SESSION_FILE),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> anyhow::Result<Option<InspectionSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let session = serde_json::from_str(&content)
            .with_context(|| format!("corrupt session file {}", self.path.display()))?;
        Ok(Some(session))
    }

    fn save(&self, session: &InspectionSession) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, content)?;
        debug!("saved session ({} statuses)", session.statuses.len());
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            debug!("cleared session {}", self.path.display());
        }
        Ok(())
    }
}
