//! TOML-based checklist repository
//!
//! Implements the `ChecklistRepository` port trait using a .inspecta.toml
//! file layered over the built-in catalog.

use std::path::{Path, PathBuf};

use log::debug;

use crate::adapters::builtin::BuiltinChecklists;
use crate::core::models::{Checklist, InspectionDomain};
use crate::core::ports::ChecklistRepository;
use crate::core::services::ScoringPolicy;

use super::parser::{ChecklistEntry, ProjectFile, find_project_file, load_file};

/// Checklist repository backed by a .inspecta.toml file
#[derive(Debug, Clone, Default)]
pub struct TomlChecklistRepository {
    /// Location of the loaded file, if one was found
    path: Option<PathBuf>,
    /// Parsed file contents (default when no file exists)
    file: ProjectFile,
}

impl TomlChecklistRepository {
    /// Wrap already-parsed project configuration
    #[must_use]
    pub const fn new(file: ProjectFile) -> Self {
        Self { path: None, file }
    }

    /// Load the nearest .inspecta.toml at or above `dir`
    ///
    /// Falls back to the built-in catalog when no file is found.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or parsed.
    pub fn discover(dir: &Path) -> anyhow::Result<Self> {
        let Some(path) = find_project_file(dir) else {
            debug!("no project file above {}, using built-in checklists", dir.display());
            return Ok(Self::default());
        };

        debug!("loading project file {}", path.display());
        let file = load_file(&path)?;
        Ok(Self {
            path: Some(path),
            file,
        })
    }

    /// Path of the loaded project file
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn entry(&self, domain: &InspectionDomain) -> Option<&ChecklistEntry> {
        self.file
            .checklists
            .iter()
            .rev()
            .find(|entry| InspectionDomain::from(entry.domain.as_str()) == *domain)
    }
}

impl ChecklistRepository for TomlChecklistRepository {
    fn find(&self, domain: &InspectionDomain) -> anyhow::Result<Option<Checklist>> {
        match self.entry(domain) {
            Some(entry) => {
                debug!("using project checklist for {domain}");
                Ok(Some(Checklist::new(domain.clone(), entry.items.clone())?))
            },
            None => BuiltinChecklists.find(domain),
        }
    }

    fn domains(&self) -> anyhow::Result<Vec<InspectionDomain>> {
        let mut domains = BuiltinChecklists.domains()?;
        for entry in &self.file.checklists {
            let domain = InspectionDomain::from(entry.domain.as_str());
            if !domains.contains(&domain) {
                domains.push(domain);
            }
        }
        Ok(domains)
    }

    fn policy(&self, domain: &InspectionDomain) -> anyhow::Result<ScoringPolicy> {
        let scoring = &self.file.scoring;
        let max_failures = scoring
            .domains
            .iter()
            .find(|(name, _)| InspectionDomain::from(name.as_str()) == *domain)
            .map(|(_, &max)| max)
            .or(scoring.max_failures);

        Ok(max_failures.map_or_else(ScoringPolicy::default, ScoringPolicy::with_max_failures))
    }
}
