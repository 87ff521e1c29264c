//! Checklist listing

use inspecta::core::ports::ChecklistRepository;
use inspecta::output::{ChecklistResult, DomainInfo, DomainListResult, OutputMode};

use super::{Workspace, parse_domain};

/// List domains, or the items of one domain
pub fn checklist_list(domain: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let ws = Workspace::open()?;
    let repo = &ws.checklists;

    if let Some(name) = domain {
        let domain = parse_domain(name)?;
        let checklist = repo.require(&domain)?;
        let policy = repo.policy(&domain)?;
        ChecklistResult::new(&checklist, &policy).render(mode);
        return Ok(());
    }

    let mut domains = Vec::new();
    for domain in repo.domains()? {
        let checklist = repo.require(&domain)?;
        domains.push(DomainInfo {
            domain: domain.to_string(),
            items: checklist.len(),
            critical: checklist.critical_count(),
            max_failures: repo.policy(&domain)?.max_failures,
        });
    }
    DomainListResult { domains }.render(mode);
    Ok(())
}
