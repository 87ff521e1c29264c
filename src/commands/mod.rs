//! Command implementations

mod checklist;
mod history;
mod init;
mod score;
mod session;

use std::path::PathBuf;

use inspecta::adapters::file::{FileRecordStore, FileSessionStore};
use inspecta::adapters::toml::TomlChecklistRepository;
use inspecta::core::models::InspectionDomain;
use inspecta::paths;

pub use checklist::checklist_list;
pub use history::history;
pub use init::init;
pub use score::score;
pub use session::session_cmd;

/// Adapters resolved for the current directory
struct Workspace {
    root: PathBuf,
    checklists: TomlChecklistRepository,
}

impl Workspace {
    fn open() -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        let root = paths::project_root(&cwd);
        let checklists = TomlChecklistRepository::discover(&root)?;
        Ok(Self { root, checklists })
    }

    fn records(&self) -> FileRecordStore {
        FileRecordStore::in_dir(&paths::state_dir(&self.root))
    }

    fn sessions(&self) -> FileSessionStore {
        FileSessionStore::in_dir(&paths::state_dir(&self.root))
    }
}

fn parse_domain(name: &str) -> anyhow::Result<InspectionDomain> {
    if name.trim().is_empty() {
        anyhow::bail!("Domain name is empty");
    }
    Ok(InspectionDomain::from(name))
}
