//! Inspection domains
//!
//! Each domain owns one checklist. The three built-in domains ship with a
//! catalog; anything else is a custom domain defined in `.inspecta.toml`.

use serde::{Deserialize, Serialize};

/// The kind of equipment or program being inspected
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InspectionDomain {
    /// Ammonia refrigeration system
    Ammonia,
    /// Compressed gas cylinders and manifolds
    CompressedGas,
    /// Personal protective equipment
    Ppe,
    /// Project-defined domain
    Custom(String),
}

impl InspectionDomain {
    /// Domains with a built-in checklist
    pub const BUILTIN: [Self; 3] = [Self::Ammonia, Self::CompressedGas, Self::Ppe];

    /// Canonical kebab-case name
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ammonia => "ammonia",
            Self::CompressedGas => "compressed-gas",
            Self::Ppe => "ppe",
            Self::Custom(name) => name,
        }
    }
}

impl From<&str> for InspectionDomain {
    fn from(s: &str) -> Self {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "ammonia" | "nh3" => Self::Ammonia,
            "compressed-gas" | "gas" => Self::CompressedGas,
            "ppe" => Self::Ppe,
            _ => Self::Custom(normalized),
        }
    }
}

impl From<String> for InspectionDomain {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<InspectionDomain> for String {
    fn from(domain: InspectionDomain) -> Self {
        domain.as_str().to_string()
    }
}

impl std::fmt::Display for InspectionDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
