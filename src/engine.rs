use tracing::{info, info_span};

use crate::error::Result;
use crate::events::Event;
use crate::models::SimConfig;
use crate::shop::{DiscardLog, EventLog, Shop};
use crate::source::{RandomGenerator, StochasticSource};
use crate::state::{RunMetadata, SimulationResult};

pub fn run_simulation(config: &SimConfig) -> Result<SimulationResult> {
    run_simulation_with_options(config, true)
}

pub fn run_simulation_summary(config: &SimConfig) -> Result<SimulationResult> {
    run_simulation_with_options(config, false)
}

pub fn run_simulation_with_options(
    config: &SimConfig,
    store_log: bool,
) -> Result<SimulationResult> {
    config.validate()?;
    let mut source = RandomGenerator::new(
        config.seed,
        config.arrival_rate,
        config.service_rate,
        config.rest_rate,
    );
    Ok(run_with_source(config, &mut source, store_log))
}

/// Runs one simulation against any draw source. The config is not
/// re-validated here.
pub fn run_with_source(
    config: &SimConfig,
    source: &mut dyn StochasticSource,
    store_log: bool,
) -> SimulationResult {
    let _span = info_span!("simulation", seed = config.seed).entered();
    info!(
        servers = config.servers,
        self_checks = config.self_checks,
        customers = config.customers,
        "starting simulation"
    );

    let mut shop = Shop::new(
        config.servers,
        config.self_checks,
        config.queue_max,
        config.rest_prob,
    );
    let timeline = Shop::make_customers(config.customers, config.greedy_fraction, source);

    let mut log: Vec<Event> = Vec::new();
    let mut discard = DiscardLog;
    let sink: &mut dyn EventLog = if store_log {
        log.reserve(config.customers * 4);
        &mut log
    } else {
        &mut discard
    };
    let statistics = shop.simulate(timeline, source, sink);

    info!(
        served = statistics.served(),
        left = statistics.left(),
        average_wait = statistics.average_wait(),
        "simulation finished"
    );

    SimulationResult {
        log,
        statistics,
        metadata: RunMetadata::from(config),
    }
}
