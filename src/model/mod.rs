pub mod level;
pub mod result;
pub mod risk;
pub mod selection;
pub mod unit;

pub use level::Level;
pub use result::SimulationResult;
pub use risk::{DistrictType, Risk};
pub use selection::ViewSelection;
pub use unit::AdminUnit;
