//! TOML parser for .inspecta.toml files
//!
//! Handles reading and deserializing project configuration files.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::ChecklistItem;
use crate::paths::PROJECT_FILE;

/// A .inspecta.toml file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectFile {
    /// Scoring thresholds
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Project-defined checklists
    #[serde(default, rename = "checklist", skip_serializing_if = "Vec::is_empty")]
    pub checklists: Vec<ChecklistEntry>,
}

/// Scoring thresholds, with optional per-domain overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Failures tolerated on a completed checklist (all domains)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_failures: Option<usize>,

    /// Per-domain `max_failures`, keyed by domain name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub domains: BTreeMap<String, usize>,
}

/// A checklist entry in .inspecta.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChecklistEntry {
    /// Domain name (built-in names replace the built-in checklist)
    pub domain: String,

    /// Items in display order
    #[serde(default, rename = "item")]
    pub items: Vec<ChecklistItem>,
}

/// Find the nearest .inspecta.toml from `from` up to the filesystem root
#[must_use]
pub fn find_project_file(from: &Path) -> Option<PathBuf> {
    let start = if from.is_file() { from.parent()? } else { from };

    start.ancestors().map(|dir| dir.join(PROJECT_FILE)).find(|candidate| candidate.is_file())
}

/// Load a .inspecta.toml file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> anyhow::Result<ProjectFile> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse(&content).with_context(|| format!("invalid project file {}", path.display()))
}

/// Parse .inspecta.toml content
pub fn parse(content: &str) -> anyhow::Result<ProjectFile> {
    Ok(toml::from_str(content)?)
}
