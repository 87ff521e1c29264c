//! Inspection history

use inspecta::core::models::RecordResult;
use inspecta::core::ports::RecordStore;
use inspecta::output::{HistoryResult, OutputMode};

use super::{Workspace, parse_domain};

/// List submitted inspections
pub fn history(domain: Option<&str>, failed_only: bool, mode: OutputMode) -> anyhow::Result<()> {
    let ws = Workspace::open()?;
    let domain = domain.map(parse_domain).transpose()?;

    let records = ws
        .records()
        .list()?
        .into_iter()
        .filter(|r| domain.as_ref().is_none_or(|d| r.domain == *d))
        .filter(|r| !failed_only || r.result == RecordResult::Fail)
        .collect();

    HistoryResult { records }.render(mode);
    Ok(())
}
