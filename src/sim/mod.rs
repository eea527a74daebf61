mod engine;
mod profile;
mod scope;
mod session;

pub use engine::{is_eligible, simulate};
pub use profile::LevelProfile;
pub use scope::resolve_candidates;
pub use session::{SIMULATION_DELAY, SimSession};
