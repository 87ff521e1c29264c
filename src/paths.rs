//! Centralized path definitions for inspecta
//!
//! This module provides a single source of truth for all filesystem paths used by inspecta.
//!
//! ## Storage Layout
//!
//! ### Per-Project
//!
//! ```text
//! site/
//! ├── .inspecta.toml          # Checklists and scoring thresholds
//! └── .inspecta/              # Local state
//!     ├── session.json        # Active inspection (deleted on submit/discard)
//!     └── records.json        # Submitted inspections
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.config/inspecta/
//! └── config.toml             # User preferences (default inspector)
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// Project-level paths
// =============================================================================

/// Project configuration filename
pub const PROJECT_FILE: &str = ".inspecta.toml";

/// Directory name for local inspecta state
pub const STATE_DIR: &str = ".inspecta";

/// Active session filename
pub const SESSION_FILE: &str = "session.json";

/// Record history filename
pub const RECORDS_FILE: &str = "records.json";

/// Get the project root for `cwd`.
///
/// This is the nearest directory at or above `cwd` holding a
/// `.inspecta.toml`, or `cwd` itself when there is none.
#[must_use]
pub fn project_root(cwd: &Path) -> PathBuf {
    cwd.ancestors()
        .find(|dir| dir.join(PROJECT_FILE).is_file())
        .unwrap_or(cwd)
        .to_path_buf()
}

/// Get path to the `.inspecta/` state directory under a project root.
#[must_use]
pub fn state_dir(root: &Path) -> PathBuf {
    root.join(STATE_DIR)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = "inspecta";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global inspecta directory.
///
/// Returns `~/.config/inspecta/` (XDG) or the platform equivalent.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(GLOBAL_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
