use serde::{Deserialize, Serialize};

use super::level::Level;
use super::risk::{DistrictType, Risk};

/// An administrative unit at any of the three levels. Level-specific
/// attributes are carried as optional fields rather than separate types, so
/// the engine can dispatch per-level behavior through one strategy table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUnit {
    pub level: Level,
    pub name: String,
    pub population: u64,
    /// Surface in km². Provinces and municipalities only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_km2: Option<f64>,
    /// Districts only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_type: Option<DistrictType>,
    /// Baseline risk. Provinces and municipalities only; districts have no
    /// risk until a simulation derives one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<Risk>,
    /// Name of the containing unit. A back-reference for lookup, never an
    /// ownership edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl AdminUnit {
    pub fn province(name: &str, risk: Risk, population: u64, area_km2: f64) -> Self {
        Self {
            level: Level::Province,
            name: name.to_string(),
            population,
            area_km2: Some(area_km2),
            district_type: None,
            risk: Some(risk),
            parent: None,
        }
    }

    pub fn municipality(province: &str, name: &str, population: u64, area_km2: f64) -> Self {
        Self {
            level: Level::Municipality,
            name: name.to_string(),
            population,
            area_km2: Some(area_km2),
            district_type: None,
            risk: None,
            parent: Some(province.to_string()),
        }
    }

    pub fn district(municipality: &str, name: &str, population: u64, ty: DistrictType) -> Self {
        Self {
            level: Level::District,
            name: name.to_string(),
            population,
            area_km2: None,
            district_type: Some(ty),
            risk: None,
            parent: Some(municipality.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn province_shape() {
        let p = AdminUnit::province("Luanda", Risk::VeryHigh, 8_329_517, 2_417.0);
        assert_eq!(p.level, Level::Province);
        assert_eq!(p.risk, Some(Risk::VeryHigh));
        assert_eq!(p.area_km2, Some(2_417.0));
        assert!(p.district_type.is_none());
        assert!(p.parent.is_none());
    }

    #[test]
    fn district_shape() {
        let d = AdminUnit::district("Cacuaco", "Kikolo", 180_000, DistrictType::Residential);
        assert_eq!(d.level, Level::District);
        assert!(d.risk.is_none());
        assert!(d.area_km2.is_none());
        assert_eq!(d.parent.as_deref(), Some("Cacuaco"));
    }

    #[test]
    fn absent_fields_omitted_from_json() {
        let d = AdminUnit::district("Viana", "Kikuxi", 200_000, DistrictType::Industrial);
        let json = serde_json::to_value(&d).unwrap();
        assert!(json.get("risk").is_none());
        assert!(json.get("area_km2").is_none());
        assert_eq!(json["district_type"], "industrial");
        assert_eq!(json["parent"], "Viana");
    }
}
