//! Read-only tabular projection of a result set for the rendering
//! collaborator's data table. Columns follow the level: provinces and
//! municipalities show risk and area, districts show their type; subunit
//! counts appear only where the level has them.

use serde::Serialize;

use crate::model::{DistrictType, Level, Risk, SimulationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    Flooded,
    Safe,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<Risk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_km2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_type: Option<DistrictType>,
    pub population: u64,
    pub status: RowStatus,
    pub affected_population: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_subunits: Option<u32>,
}

pub fn rows(results: &[SimulationResult]) -> Vec<ReportRow> {
    results
        .iter()
        .map(|result| ReportRow {
            name: result.name.clone(),
            // The district table shows the unit type in place of a risk
            // column.
            risk: (result.level != Level::District).then_some(result.risk),
            area_km2: result.area_km2,
            district_type: result.district_type,
            population: result.population,
            status: if result.flooded {
                RowStatus::Flooded
            } else {
                RowStatus::Safe
            },
            affected_population: result.affected_population,
            affected_subunits: result.affected_subunits,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn province_result(flooded: bool) -> SimulationResult {
        SimulationResult {
            level: Level::Province,
            name: "Malanje".to_string(),
            parent: None,
            population: 1_108_404,
            area_km2: Some(97_602.0),
            district_type: None,
            risk: Risk::High,
            flooded,
            affected_population: if flooded { 200_000 } else { 0 },
            affected_subunits: Some(if flooded { 9 } else { 0 }),
        }
    }

    #[test]
    fn province_row_shape() {
        let rows = rows(&[province_result(true)]);
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["name"], "Malanje");
        assert_eq!(json["risk"], "high");
        assert_eq!(json["status"], "flooded");
        assert_eq!(json["affected_subunits"], 9);
        assert!(json.get("district_type").is_none());
    }

    #[test]
    fn district_row_swaps_risk_for_type() {
        let result = SimulationResult {
            level: Level::District,
            name: "Restinga".to_string(),
            parent: Some("Lobito".to_string()),
            population: 50_000,
            area_km2: None,
            district_type: Some(DistrictType::Port),
            risk: Risk::Low,
            flooded: false,
            affected_population: 0,
            affected_subunits: None,
        };
        let json = serde_json::to_value(&rows(&[result])[0]).unwrap();
        assert!(json.get("risk").is_none());
        assert_eq!(json["district_type"], "port");
        assert_eq!(json["status"], "safe");
        assert!(json.get("affected_subunits").is_none());
    }

    #[test]
    fn empty_results_project_to_empty_table() {
        assert!(rows(&[]).is_empty());
    }
}
