//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.config/inspecta/config.toml` (XDG standard).

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::models::InspectionHeader;
use crate::paths;

/// Global inspecta configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Defaults applied to new sessions
    #[serde(default)]
    pub inspector: InspectorConfig,
}

/// Defaults for the person running inspections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InspectorConfig {
    /// Inspector name filled into new sessions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Location filled into new sessions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl GlobalConfig {
    /// Load config from the global path, or default if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&paths::global_config())
    }

    /// Load config from `path`, or default if missing or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|content| toml::from_str::<Self>(&content).map_err(anyhow::Error::from))
        {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring invalid config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to disk
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Fill blank header fields from the configured defaults
    pub fn apply_defaults(&self, header: &mut InspectionHeader) {
        if header.inspector.trim().is_empty()
            && let Some(name) = &self.inspector.name
        {
            header.inspector.clone_from(name);
        }
        if header.location.trim().is_empty()
            && let Some(location) = &self.inspector.location
        {
            header.location.clone_from(location);
        }
    }
}
