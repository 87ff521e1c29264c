//! Inspection session model
//!
//! A session is the in-progress state of one inspection form: who is
//! inspecting what, and the statuses recorded so far. It is created empty,
//! mutated one item at a time, and consumed when it is submitted.

use serde::{Deserialize, Serialize};

use super::{CheckStatus, InspectionDomain, ParseValueError, StatusMap};

/// Identifying fields of an inspection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionHeader {
    /// Equipment or asset tag
    #[serde(default)]
    pub equipment_id: String,
    /// Site, building or area
    #[serde(default)]
    pub location: String,
    /// Person performing the inspection
    #[serde(default)]
    pub inspector: String,
    /// Inspection date (YYYY-MM-DD)
    #[serde(default)]
    pub date: String,
    /// Free-form remarks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A settable header field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    /// `equipment_id`
    EquipmentId,
    /// `location`
    Location,
    /// `inspector`
    Inspector,
    /// `date`
    Date,
    /// `notes`
    Notes,
}

impl HeaderField {
    /// Fields that must be non-blank before submitting, in display order
    pub const REQUIRED: [Self; 4] = [Self::EquipmentId, Self::Location, Self::Inspector, Self::Date];

    /// Field name as used in messages and on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EquipmentId => "equipment_id",
            Self::Location => "location",
            Self::Inspector => "inspector",
            Self::Date => "date",
            Self::Notes => "notes",
        }
    }
}

impl std::fmt::Display for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for HeaderField {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "equipment_id" | "equipment" => Ok(Self::EquipmentId),
            "location" => Ok(Self::Location),
            "inspector" => Ok(Self::Inspector),
            "date" => Ok(Self::Date),
            "notes" => Ok(Self::Notes),
            _ => Err(ParseValueError {
                kind: "field",
                value: s.to_string(),
                expected: "equipment_id, location, inspector, date, notes",
            }),
        }
    }
}

impl InspectionHeader {
    /// Current value of a field (empty when unset)
    #[must_use]
    pub fn get(&self, field: HeaderField) -> &str {
        match field {
            HeaderField::EquipmentId => &self.equipment_id,
            HeaderField::Location => &self.location,
            HeaderField::Inspector => &self.inspector,
            HeaderField::Date => &self.date,
            HeaderField::Notes => self.notes.as_deref().unwrap_or_default(),
        }
    }

    /// Overwrite a field
    pub fn set(&mut self, field: HeaderField, value: impl Into<String>) {
        let value = value.into();
        match field {
            HeaderField::EquipmentId => self.equipment_id = value,
            HeaderField::Location => self.location = value,
            HeaderField::Inspector => self.inspector = value,
            HeaderField::Date => self.date = value,
            HeaderField::Notes => self.notes = (!value.trim().is_empty()).then_some(value),
        }
    }
}

/// In-progress inspection state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionSession {
    /// Domain whose checklist is being filled in
    pub domain: InspectionDomain,

    /// Identifying fields
    #[serde(default)]
    pub header: InspectionHeader,

    /// Recorded statuses; absent ids are unanswered
    #[serde(default)]
    pub statuses: StatusMap,

    /// When the session was started (RFC 3339)
    pub started_at: String,
}

impl InspectionSession {
    /// Start an empty session
    #[must_use]
    pub fn new(domain: InspectionDomain, header: InspectionHeader) -> Self {
        Self {
            domain,
            header,
            statuses: StatusMap::new(),
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Record a status, replacing any earlier one. Returns the replaced status.
    pub fn set_status(&mut self, id: impl Into<String>, status: CheckStatus) -> Option<CheckStatus> {
        self.statuses.insert(id.into(), status)
    }

    /// Forget the status for an item. Returns the removed status.
    pub fn clear_status(&mut self, id: &str) -> Option<CheckStatus> {
        self.statuses.remove(id)
    }

    /// Status recorded for an item, if any
    #[must_use]
    pub fn status(&self, id: &str) -> Option<CheckStatus> {
        self.statuses.get(id).copied()
    }

    /// Drop every recorded status, keeping the header
    pub fn reset(&mut self) {
        self.statuses.clear();
    }
}
