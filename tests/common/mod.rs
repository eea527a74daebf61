use rand::SeedableRng;
use rand::rngs::SmallRng;

use flood_sim::model::Level;
use flood_sim::{Dataset, ViewSelection};

pub fn dataset() -> Dataset {
    Dataset::angola()
}

pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

pub fn selection(level: Level, flood_rate: i32) -> ViewSelection {
    ViewSelection::default()
        .with_level(level)
        .with_flood_rate(flood_rate)
}
