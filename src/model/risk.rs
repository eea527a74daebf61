use serde::{Deserialize, Serialize};

/// Ordinal baseline flood-risk category. Provinces and municipalities carry
/// one in the reference dataset; districts only gain a derived risk after a
/// simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Risk {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Risk {
    pub fn as_str(self) -> &'static str {
        match self {
            Risk::Low => "low",
            Risk::Medium => "medium",
            Risk::High => "high",
            Risk::VeryHigh => "very_high",
        }
    }
}

/// Categorical tag carried by districts only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistrictType {
    Residential,
    Commercial,
    Industrial,
    Touristic,
    Port,
}
