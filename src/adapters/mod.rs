//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `builtin/` - Static checklist catalog
//! - `toml/` - `.inspecta.toml` parsing, writing and checklist lookup
//! - `file/` - JSON record history and active session

pub mod builtin;
pub mod file;
pub mod toml;
