use serde::{Deserialize, Serialize};

use super::level::Level;

/// The process-wide view state driving scope resolution. `None` in a filter
/// field means "all". Transitions are pure reducers returning a new value;
/// changing a higher-order field resets every lower-order filter so the
/// selection can never reference a scope that no longer exists.
///
/// Field order, highest first: level, province, municipality, district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSelection {
    pub level: Level,
    pub province: Option<String>,
    pub municipality: Option<String>,
    pub district: Option<String>,
    /// Percentage 0..=100. Out-of-range values are tolerated by the engine
    /// (negative behaves as 0, over 100 as certainty).
    pub flood_rate: i32,
}

impl Default for ViewSelection {
    fn default() -> Self {
        Self {
            level: Level::Province,
            province: None,
            municipality: None,
            district: None,
            flood_rate: 50,
        }
    }
}

impl ViewSelection {
    pub fn with_level(self, level: Level) -> Self {
        Self {
            level,
            municipality: None,
            district: None,
            ..self
        }
    }

    pub fn with_province(self, province: Option<String>) -> Self {
        Self {
            province,
            municipality: None,
            district: None,
            ..self
        }
    }

    pub fn with_municipality(self, municipality: Option<String>) -> Self {
        Self {
            municipality,
            district: None,
            ..self
        }
    }

    pub fn with_district(self, district: Option<String>) -> Self {
        Self { district, ..self }
    }

    pub fn with_flood_rate(self, flood_rate: i32) -> Self {
        Self { flood_rate, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn district_selection() -> ViewSelection {
        ViewSelection::default()
            .with_level(Level::District)
            .with_province(Some("Luanda".to_string()))
            .with_municipality(Some("Cacuaco".to_string()))
            .with_district(Some("Kikolo".to_string()))
    }

    #[test]
    fn level_change_resets_lower_filters() {
        let sel = district_selection().with_level(Level::Province);
        assert_eq!(sel.level, Level::Province);
        // Province survives a level change; lower-order filters do not.
        assert_eq!(sel.province.as_deref(), Some("Luanda"));
        assert!(sel.municipality.is_none());
        assert!(sel.district.is_none());
    }

    #[test]
    fn province_change_resets_municipality_and_district() {
        let sel = district_selection().with_province(Some("Benguela".to_string()));
        assert_eq!(sel.province.as_deref(), Some("Benguela"));
        assert!(sel.municipality.is_none());
        assert!(sel.district.is_none());
    }

    #[test]
    fn municipality_change_resets_district() {
        let sel = district_selection().with_municipality(Some("Viana".to_string()));
        assert_eq!(sel.municipality.as_deref(), Some("Viana"));
        assert!(sel.district.is_none());
    }

    #[test]
    fn flood_rate_change_keeps_scope() {
        let sel = district_selection().with_flood_rate(80);
        assert_eq!(sel.flood_rate, 80);
        assert_eq!(sel.district.as_deref(), Some("Kikolo"));
    }
}
