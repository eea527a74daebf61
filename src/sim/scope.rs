use crate::dataset::Dataset;
use crate::model::{AdminUnit, Level, ViewSelection};

/// Select the candidate units for a run, in dataset declaration order.
///
/// Province level always returns the full province set: a named province
/// narrows *eligibility* during simulation, not the candidate set, so the
/// whole country stays visible while only the selected province can flood.
/// District level resolves by highest specificity first: a named district,
/// then a named municipality's list, then all districts under a named
/// province, then all districts. Unknown names yield an empty set, never an
/// error.
pub fn resolve_candidates<'a>(
    dataset: &'a Dataset,
    selection: &ViewSelection,
) -> Vec<&'a AdminUnit> {
    match selection.level {
        Level::Province => dataset.provinces().collect(),
        Level::Municipality => match selection.province.as_deref() {
            Some(province) => dataset.municipalities_of(province),
            None => dataset.municipalities().collect(),
        },
        Level::District => {
            if let Some(district) = selection.district.as_deref() {
                dataset
                    .find(Level::District, district)
                    .into_iter()
                    .collect()
            } else if let Some(municipality) = selection.municipality.as_deref() {
                dataset.districts_of(municipality)
            } else if let Some(province) = selection.province.as_deref() {
                dataset
                    .municipalities_of(province)
                    .into_iter()
                    .flat_map(|m| dataset.districts_of(&m.name))
                    .collect()
            } else {
                dataset.districts().collect()
            }
        }
    }
}
