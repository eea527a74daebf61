use serde::{Deserialize, Serialize};

use super::level::Level;
use super::risk::{DistrictType, Risk};

/// One simulated unit. Derived and ephemeral: a run produces a fresh set of
/// these, the set is never mutated in place, and any selection change
/// discards it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub level: Level,
    pub name: String,
    /// Resolved containing-unit name, when the dataset groups this unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub population: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_km2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_type: Option<DistrictType>,
    /// Provinces keep their baseline risk; municipalities and districts
    /// carry a derived risk (high if flooded, low otherwise).
    pub risk: Risk,
    pub flooded: bool,
    /// Always within `[0, population]`; exactly 0 when not flooded.
    pub affected_population: u64,
    /// Affected comunas (province) or affected districts (municipality);
    /// `None` for districts, which have no subunit concept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_subunits: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn district_result_omits_subunits_in_json() {
        let result = SimulationResult {
            level: Level::District,
            name: "Ingombota".to_string(),
            parent: Some("Luanda".to_string()),
            population: 150_000,
            area_km2: None,
            district_type: Some(DistrictType::Commercial),
            risk: Risk::High,
            flooded: true,
            affected_population: 42_000,
            affected_subunits: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("affected_subunits").is_none());
        assert!(json.get("area_km2").is_none());
        assert_eq!(json["risk"], "high");
        assert_eq!(json["flooded"], true);
    }
}
