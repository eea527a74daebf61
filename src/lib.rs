pub mod dataset;
pub mod geo;
pub mod model;
pub mod name;
pub mod report;
pub mod sim;
pub mod stats;
pub mod style;

pub use dataset::Dataset;
pub use model::{AdminUnit, DistrictType, Level, Risk, SimulationResult, ViewSelection};
pub use sim::{SIMULATION_DELAY, SimSession, resolve_candidates, simulate};
pub use stats::{Statistics, aggregate};
pub use style::{FeatureStyle, style_for};
