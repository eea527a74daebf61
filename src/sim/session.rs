use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::engine::simulate;
use crate::dataset::Dataset;
use crate::model::{Level, SimulationResult, ViewSelection};
use crate::stats::{Statistics, aggregate};

/// Minimum visible latency of a simulation run before results are published.
pub const SIMULATION_DELAY: Duration = Duration::from_millis(1500);

/// One interactive simulation session: the current selection, the latest
/// result set, and an owned seeded RNG.
///
/// Every selection setter invalidates the live result set immediately, before
/// any new run is requested. `run` is the single suspending operation; it
/// takes `&mut self`, so invocations are serialized by construction. There
/// is no cancellation and no queuing, and each run's result set atomically
/// replaces the previous one.
#[derive(Debug)]
pub struct SimSession {
    dataset: Dataset,
    selection: ViewSelection,
    results: Option<Vec<SimulationResult>>,
    rng: SmallRng,
    delay: Duration,
}

impl SimSession {
    pub fn new(dataset: Dataset, seed: u64) -> Self {
        Self {
            dataset,
            selection: ViewSelection::default(),
            results: None,
            rng: SmallRng::seed_from_u64(seed),
            delay: SIMULATION_DELAY,
        }
    }

    /// Override the publish delay (tests use `Duration::ZERO`).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &ViewSelection {
        &self.selection
    }

    pub fn set_level(&mut self, level: Level) {
        self.selection = self.selection.clone().with_level(level);
        self.results = None;
    }

    pub fn set_province(&mut self, province: Option<String>) {
        self.selection = self.selection.clone().with_province(province);
        self.results = None;
    }

    pub fn set_municipality(&mut self, municipality: Option<String>) {
        self.selection = self.selection.clone().with_municipality(municipality);
        self.results = None;
    }

    pub fn set_district(&mut self, district: Option<String>) {
        self.selection = self.selection.clone().with_district(district);
        self.results = None;
    }

    /// The flood rate is a run parameter, not a scope filter; changing it
    /// keeps the current result set on display.
    pub fn set_flood_rate(&mut self, flood_rate: i32) {
        self.selection = self.selection.clone().with_flood_rate(flood_rate);
    }

    /// Execute one run: wait out the fixed minimum latency, then publish a
    /// fresh result set in place of the old one.
    pub async fn run(&mut self) -> &[SimulationResult] {
        tokio::time::sleep(self.delay).await;
        let results = simulate(&self.dataset, &self.selection, &mut self.rng);
        let flooded = results.iter().filter(|r| r.flooded).count();
        tracing::info!(
            level = self.selection.level.as_str(),
            total = results.len(),
            flooded,
            "simulation run complete"
        );
        self.results.insert(results).as_slice()
    }

    pub fn results(&self) -> Option<&[SimulationResult]> {
        self.results.as_deref()
    }

    /// Summary of the live result set; `None` whenever no run is current,
    /// so stale statistics can never be observed after a selection change.
    pub fn statistics(&self) -> Option<Statistics> {
        self.results
            .as_deref()
            .map(|results| aggregate(results, self.selection.level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SimSession {
        SimSession::new(Dataset::angola(), 42).with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn run_publishes_results_and_statistics() {
        let mut session = session();
        assert!(session.results().is_none());
        assert!(session.statistics().is_none());

        session.set_flood_rate(100);
        let results = session.run().await;
        assert_eq!(results.len(), 12);

        let stats = session.statistics().unwrap();
        assert_eq!(stats.flooded_count, 12);
        assert_eq!(stats.avg_risk, 100.0);
    }

    #[tokio::test]
    async fn selection_change_invalidates_results() {
        let mut session = session();
        session.set_level(Level::District);
        session.run().await;
        assert!(session.statistics().is_some());

        // Going from District back to Province resets the lower filters and discards
        // the result set; statistics go back to None, never stale data.
        session.set_level(Level::Province);
        assert!(session.selection().municipality.is_none());
        assert!(session.selection().district.is_none());
        assert!(session.results().is_none());
        assert!(session.statistics().is_none());
    }

    #[tokio::test]
    async fn rerun_replaces_previous_results_wholesale() {
        let mut session = session();
        session.set_flood_rate(100);
        session.run().await;
        let first: Vec<_> = session.results().unwrap().to_vec();
        assert!(first.iter().all(|r| r.flooded));

        session.set_flood_rate(0);
        session.run().await;
        let second = session.results().unwrap();
        assert_eq!(second.len(), first.len());
        assert!(second.iter().all(|r| !r.flooded));
    }

    #[tokio::test]
    async fn flood_rate_change_keeps_display_results() {
        let mut session = session();
        session.run().await;
        session.set_flood_rate(80);
        assert!(session.results().is_some());
    }
}
