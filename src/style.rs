//! Bridges simulation output to external boundary features: given a
//! feature's name, produce the fill color and flooded flag for rendering.
//! Styling is total: an unmatched name or missing risk falls back to
//! defaults rather than failing the render.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::model::{Level, Risk, SimulationResult};
use crate::name::matches;

/// Fill color for a flooded unit; overrides any risk color.
pub const FLOODED_COLOR: &str = "#3B82F6";
/// Fill color when no risk category applies.
pub const NEUTRAL_COLOR: &str = "#9CA3AF";

pub fn risk_color(risk: Risk) -> &'static str {
    match risk {
        Risk::VeryHigh => "#DC2626",
        Risk::High => "#EA580C",
        Risk::Medium => "#EAB308",
        Risk::Low => "#16A34A",
    }
}

/// Read-only styling projection handed to the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureStyle {
    pub fill_color: &'static str,
    pub flooded: bool,
}

/// Style the boundary feature named `feature_name`, preferring the live
/// result set, falling back to the baseline dataset at the current level,
/// and defaulting to a dry low-risk style when nothing matches.
pub fn style_for(
    feature_name: &str,
    results: Option<&[SimulationResult]>,
    dataset: &Dataset,
    level: Level,
) -> FeatureStyle {
    if let Some(results) = results {
        if let Some(result) = results.iter().find(|r| matches(&r.name, feature_name)) {
            return style_of(Some(result.risk), result.flooded);
        }
    } else if let Some(unit) = dataset
        .at_level(level)
        .find(|u| matches(&u.name, feature_name))
    {
        return style_of(unit.risk, false);
    }
    tracing::debug!(feature = feature_name, "no unit matched boundary feature");
    style_of(Some(Risk::Low), false)
}

fn style_of(risk: Option<Risk>, flooded: bool) -> FeatureStyle {
    let fill_color = if flooded {
        FLOODED_COLOR
    } else {
        risk.map_or(NEUTRAL_COLOR, risk_color)
    };
    FeatureStyle { fill_color, flooded }
}
