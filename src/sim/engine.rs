use rand::{Rng, RngCore};

use super::profile::LevelProfile;
use super::scope::resolve_candidates;
use crate::dataset::Dataset;
use crate::model::{AdminUnit, Level, Risk, SimulationResult, ViewSelection};
use crate::name::matches;

/// Run one flood simulation over the selection's candidate set.
///
/// Pure apart from the injected randomness source: the same seed and
/// selection always reproduce the same flood/no-flood sequence. The flood
/// rate is read as a percentage and clamped, so a negative input behaves as
/// probability 0 and anything above 100 as certainty.
pub fn simulate(
    dataset: &Dataset,
    selection: &ViewSelection,
    rng: &mut dyn RngCore,
) -> Vec<SimulationResult> {
    let rate = (f64::from(selection.flood_rate) / 100.0).clamp(0.0, 1.0);
    let candidates = resolve_candidates(dataset, selection);
    tracing::debug!(
        level = selection.level.as_str(),
        candidates = candidates.len(),
        rate,
        "resolved simulation scope"
    );
    let mut results = Vec::with_capacity(candidates.len());
    for unit in candidates {
        results.push(simulate_unit(
            dataset,
            unit,
            selection.province.as_deref(),
            rate,
            rng,
        ));
    }
    results
}

/// Whether a unit may flood under the active province filter. With no filter
/// every candidate is eligible; otherwise the unit's resolved province
/// ancestor must match by normalized name. A unit whose parentage cannot be
/// resolved is treated as ungrouped and stays ineligible rather than failing.
pub fn is_eligible(dataset: &Dataset, unit: &AdminUnit, province_filter: Option<&str>) -> bool {
    let Some(filter) = province_filter else {
        return true;
    };
    let ancestor = match unit.level {
        Level::Province => Some(unit.name.as_str()),
        Level::Municipality => unit.parent.as_deref(),
        Level::District => dataset.province_of_district(&unit.name),
    };
    ancestor.is_some_and(|name| matches(name, filter))
}

fn simulate_unit(
    dataset: &Dataset,
    unit: &AdminUnit,
    province_filter: Option<&str>,
    rate: f64,
    rng: &mut dyn RngCore,
) -> SimulationResult {
    let profile = LevelProfile::for_level(unit.level);
    let eligible = is_eligible(dataset, unit, province_filter);
    let flooded = eligible && rng.random_range(0.0..1.0) < rate;

    let affected_subunits = profile.subunit_range.map(|(lo, hi)| {
        if flooded {
            rng.random_range(lo..=hi)
        } else {
            0
        }
    });
    let affected_population = if flooded {
        let (lo, hi) = profile.affected_share;
        let share = rng.random_range(lo..hi);
        (unit.population as f64 * share).floor() as u64
    } else {
        0
    };
    let risk = if profile.derives_risk {
        if flooded { Risk::High } else { Risk::Low }
    } else {
        unit.risk.unwrap_or(Risk::Low)
    };

    SimulationResult {
        level: unit.level,
        name: unit.name.clone(),
        parent: unit.parent.clone(),
        population: unit.population,
        area_km2: unit.area_km2,
        district_type: unit.district_type,
        risk,
        flooded,
        affected_population,
        affected_subunits,
    }
}
