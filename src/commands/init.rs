//! Initialize inspecta in a directory

use inspecta::adapters::toml::write_template;
use inspecta::output::{OperationResult, OutputMode};
use inspecta::paths;

/// Write a starter .inspecta.toml in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let path = write_template(&cwd, force)?;
    std::fs::create_dir_all(paths::state_dir(&cwd))?;

    OperationResult::ok(format!(
        "Created {}\nEdit it to add project checklists or adjust scoring thresholds.",
        path.display()
    ))
    .render(mode);
    Ok(())
}
