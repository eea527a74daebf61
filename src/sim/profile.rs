use crate::model::Level;

/// Per-level simulation behavior, dispatched as data instead of branching in
/// the engine: the affected-subunit range, the affected-population share, and
/// whether a run's outcome overrides the unit's baseline risk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProfile {
    /// Inclusive bounds for the affected-subunit draw when flooded.
    /// `None` for districts, which have no subunit concept.
    pub subunit_range: Option<(u32, u32)>,
    /// Half-open `[lo, hi)` bounds for the affected share of population.
    pub affected_share: (f64, f64),
    /// Municipalities and districts display a derived risk (high if flooded,
    /// low otherwise); provinces keep their static baseline.
    pub derives_risk: bool,
}

impl LevelProfile {
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Province => Self {
                subunit_range: Some((5, 19)),
                affected_share: (0.1, 0.4),
                derives_risk: false,
            },
            Level::Municipality => Self {
                subunit_range: Some((2, 9)),
                affected_share: (0.1, 0.5),
                derives_risk: true,
            },
            Level::District => Self {
                subunit_range: None,
                affected_share: (0.2, 0.7),
                derives_risk: true,
            },
        }
    }
}
