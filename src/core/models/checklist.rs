//! Checklist model
//!
//! A checklist is the fixed, ordered list of conditions inspected for one
//! domain. Items are defined statically and never change during a session.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::InspectionDomain;

static ITEM_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("item id pattern compiles"));

/// Errors raised when building a checklist
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecklistError {
    /// A checklist must contain at least one item
    #[error("checklist for {0} has no items")]
    Empty(InspectionDomain),

    /// Two items share an id
    #[error("duplicate item id in {domain} checklist: {id}")]
    DuplicateId {
        /// Domain of the offending checklist
        domain: InspectionDomain,
        /// The repeated id
        id: String,
    },

    /// Item id is not a lowercase slug
    #[error("invalid item id {0:?}: use lowercase letters, digits, '-' or '_'")]
    InvalidId(String),
}

/// A single inspectable condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Stable identifier, unique within its checklist
    pub id: String,

    /// Prompt shown to the operator
    pub label: String,

    /// A failure on this item alone fails the inspection
    #[serde(default)]
    pub critical: bool,

    /// Optional grouping heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl ChecklistItem {
    /// Create a non-critical item
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            critical: false,
            section: None,
        }
    }

    /// Create a critical item
    #[must_use]
    pub fn critical(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            critical: true,
            ..Self::new(id, label)
        }
    }

    /// Place the item under a section heading
    #[must_use]
    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}

/// A validated, non-empty checklist for one domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checklist {
    domain: InspectionDomain,
    items: Vec<ChecklistItem>,
}

impl Checklist {
    /// Build a checklist, rejecting empty lists, duplicate ids and malformed ids
    pub fn new(domain: InspectionDomain, items: Vec<ChecklistItem>) -> Result<Self, ChecklistError> {
        if items.is_empty() {
            return Err(ChecklistError::Empty(domain));
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !ITEM_ID.is_match(&item.id) {
                return Err(ChecklistError::InvalidId(item.id.clone()));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(ChecklistError::DuplicateId {
                    domain,
                    id: item.id.clone(),
                });
            }
        }

        Ok(Self { domain, items })
    }

    /// Domain this checklist belongs to
    #[must_use]
    pub const fn domain(&self) -> &InspectionDomain {
        &self.domain
    }

    /// Items in display order
    #[must_use]
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Look up an item by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether the checklist defines `id`
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: construction rejects empty checklists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of critical items
    #[must_use]
    pub fn critical_count(&self) -> usize {
        self.items.iter().filter(|item| item.critical).count()
    }
}
