//! One-shot scoring

use std::collections::BTreeMap;
use std::fs;

use anyhow::Context;
use log::warn;

use inspecta::core::models::{CheckStatus, StatusMap};
use inspecta::core::ports::ChecklistRepository;
use inspecta::output::{OutputMode, ScoreReport};

use super::{Workspace, parse_domain};

/// Score statuses against a checklist without touching the session
pub fn score(
    domain: &str,
    pairs: &[String],
    from: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let ws = Workspace::open()?;
    let domain = parse_domain(domain)?;
    let checklist = ws.checklists.require(&domain)?;
    let policy = ws.checklists.policy(&domain)?;

    let mut statuses = match from {
        Some(path) => load_statuses(path)?,
        None => StatusMap::new(),
    };
    for pair in pairs {
        let (id, status) = parse_pair(pair)?;
        statuses.insert(id, status);
    }

    let report = ScoreReport::new(&checklist, &statuses, &policy);
    if !report.ignored.is_empty() {
        warn!("ignoring items not on the {domain} checklist: {}", report.ignored.join(", "));
    }
    report.render(mode);
    Ok(())
}

/// Parse `id=status`
fn parse_pair(pair: &str) -> anyhow::Result<(String, CheckStatus)> {
    let Some((id, status)) = pair.split_once('=') else {
        anyhow::bail!("Expected ID=STATUS, got: {pair}");
    };
    let id = id.trim();
    if id.is_empty() {
        anyhow::bail!("Missing item id in: {pair}");
    }
    Ok((id.to_string(), status.parse::<CheckStatus>()?))
}

fn load_statuses(path: &str) -> anyhow::Result<StatusMap> {
    let content = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    let raw: BTreeMap<String, String> =
        serde_json::from_str(&content).with_context(|| format!("expected a JSON object in {path}"))?;

    raw.into_iter()
        .map(|(id, status)| -> anyhow::Result<(String, CheckStatus)> {
            Ok((id, status.parse::<CheckStatus>()?))
        })
        .collect()
}
