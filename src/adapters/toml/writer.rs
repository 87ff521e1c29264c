//! TOML writer for .inspecta.toml files
//!
//! Creates the commented starter file written by `inspecta init`.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::models::InspectionDomain;
use crate::core::services::DEFAULT_MAX_FAILURES;
use crate::paths::PROJECT_FILE;

/// Render the starter project file
#[must_use]
pub fn format_template() -> String {
    let mut out = String::new();
    out.push_str("# inspecta project configuration\n\n");

    out.push_str("[scoring]\n");
    out.push_str("# A completed checklist with more failed items than this fails,\n");
    out.push_str("# even when no critical item failed.\n");
    let _ = writeln!(out, "max_failures = {DEFAULT_MAX_FAILURES}");
    out.push('\n');

    out.push_str("# Per-domain overrides\n");
    out.push_str("# [scoring.domains]\n");
    for domain in InspectionDomain::BUILTIN {
        let _ = writeln!(out, "# {} = {DEFAULT_MAX_FAILURES}", domain.as_str().replace('-', "_"));
    }
    out.push('\n');

    out.push_str("# Project checklists. A built-in domain name replaces its built-in list.\n");
    out.push_str("# [[checklist]]\n");
    out.push_str("# domain = \"forklift\"\n");
    out.push_str("#\n");
    out.push_str("# [[checklist.item]]\n");
    out.push_str("# id = \"brakes\"\n");
    out.push_str("# label = \"Service and parking brakes hold\"\n");
    out.push_str("# critical = true\n");
    out.push_str("# section = \"Controls\"\n");
    out
}

/// Write the starter file into `dir`
///
/// # Errors
///
/// Returns an error if the file exists and `force` is false, or on I/O failure.
pub fn write_template(dir: &Path, force: bool) -> anyhow::Result<PathBuf> {
    let path = dir.join(PROJECT_FILE);
    if path.exists() && !force {
        anyhow::bail!("{} already exists. Use --force to overwrite.", path.display());
    }

    fs::write(&path, format_template())?;
    debug!("wrote {}", path.display());
    Ok(path)
}
