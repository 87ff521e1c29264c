//! Checklist repository port
//!
//! Defines the interface for loading checklists and the scoring policy
//! that applies to them.

use super::super::models::{Checklist, InspectionDomain};
use super::super::services::ScoringPolicy;

/// Source of checklists
///
/// Implementations resolve checklists from various sources (the built-in
/// catalog, `.inspecta.toml` project files, ...).
pub trait ChecklistRepository: Send + Sync {
    /// Load the checklist for a domain
    ///
    /// Returns `Ok(None)` when the domain has no checklist.
    fn find(&self, domain: &InspectionDomain) -> anyhow::Result<Option<Checklist>>;

    /// Domains with a checklist, in display order
    fn domains(&self) -> anyhow::Result<Vec<InspectionDomain>>;

    /// Scoring policy for a domain
    fn policy(&self, _domain: &InspectionDomain) -> anyhow::Result<ScoringPolicy> {
        Ok(ScoringPolicy::default())
    }

    /// Load the checklist for a domain, failing when there is none
    fn require(&self, domain: &InspectionDomain) -> anyhow::Result<Checklist> {
        match self.find(domain)? {
            Some(checklist) => Ok(checklist),
            None => anyhow::bail!("No checklist defined for domain: {domain}"),
        }
    }
}
