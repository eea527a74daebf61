use serde::{Deserialize, Serialize};

/// Granularity of the active view and simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Province,
    Municipality,
    District,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Province => "province",
            Level::Municipality => "municipality",
            Level::District => "district",
        }
    }

    /// Label of the subunit counted when a unit at this level floods.
    /// Districts are the finest level and have no subunit concept.
    pub fn subunit_label(self) -> Option<&'static str> {
        match self {
            Level::Province => Some("comunas"),
            Level::Municipality => Some("districts"),
            Level::District => None,
        }
    }
}
