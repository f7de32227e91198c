use serde::Serialize;

use crate::events::Event;
use crate::models::SimConfig;
use crate::stats::Statistics;

#[derive(Clone, Debug, Serialize)]
pub struct RunMetadata {
    pub seed: u64,
    pub servers: usize,
    pub self_checks: usize,
    pub queue_max: usize,
    pub customers: usize,
}

impl From<&SimConfig> for RunMetadata {
    fn from(config: &SimConfig) -> Self {
        Self {
            seed: config.seed,
            servers: config.servers,
            self_checks: config.self_checks,
            queue_max: config.queue_max,
            customers: config.customers,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Customer-facing events in the order they were processed. Empty for
    /// summary-only runs.
    pub log: Vec<Event>,
    pub statistics: Statistics,
    pub metadata: RunMetadata,
}
