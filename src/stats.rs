use serde::Serialize;

use crate::model::{Level, SimulationResult};

/// Level-specific summary of one result set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub flooded_count: usize,
    pub total_affected: u64,
    /// Sum of affected comunas (province level) or affected districts
    /// (municipality level); at district level, the flooded count itself.
    pub total_areas: u64,
    /// Flooded share of the result set, as a percentage. 0 for an empty set.
    pub avg_risk: f64,
}

pub fn aggregate(results: &[SimulationResult], level: Level) -> Statistics {
    let flooded_count = results.iter().filter(|r| r.flooded).count();
    let total_affected = results.iter().map(|r| r.affected_population).sum();
    let total_areas = match level {
        Level::Province | Level::Municipality => results
            .iter()
            .map(|r| u64::from(r.affected_subunits.unwrap_or(0)))
            .sum(),
        Level::District => flooded_count as u64,
    };
    let avg_risk = if results.is_empty() {
        0.0
    } else {
        flooded_count as f64 / results.len() as f64 * 100.0
    };
    Statistics {
        flooded_count,
        total_affected,
        total_areas,
        avg_risk,
    }
}
