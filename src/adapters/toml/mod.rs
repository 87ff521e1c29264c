//! TOML-based checklist repository
//!
//! Implements `ChecklistRepository` using `.inspecta.toml` files.
//!
//! - [`parser`] - Read and deserialize .inspecta.toml files
//! - [`writer`] - Create the starter .inspecta.toml
//! - [`repository`] - `ChecklistRepository` implementation

pub mod parser;
pub mod repository;
pub mod writer;

pub use parser::{ChecklistEntry, ProjectFile, ScoringConfig, find_project_file, load_file};
pub use repository::TomlChecklistRepository;
pub use writer::{format_template, write_template};
