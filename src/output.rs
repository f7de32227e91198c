use serde::Serialize;

use crate::state::{RunMetadata, SimulationResult};

pub trait Formatter {
    fn write(&self, result: &SimulationResult) -> String;
}

/// One line per customer-facing event, then the summary line.
pub struct HumanFormatter;

/// Only the `[avg served left]` summary line.
pub struct SummaryFormatter;

pub struct JsonFormatter;

impl Formatter for HumanFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let mut out = String::new();
        for event in &result.log {
            out.push_str(&event.to_string());
            out.push('\n');
        }
        out.push_str(&result.statistics.to_string());
        out.push('\n');
        out
    }
}

impl Formatter for SummaryFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        format!("{}\n", result.statistics)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: &'a RunMetadata,
    log: Vec<String>,
    statistics: JsonStatistics,
}

#[derive(Serialize)]
struct JsonStatistics {
    total_customers: usize,
    served: usize,
    left: usize,
    total_wait_time: f64,
    average_wait: f64,
}

impl Formatter for JsonFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let stats = &result.statistics;
        let report = JsonReport {
            metadata: &result.metadata,
            log: result.log.iter().map(|event| event.to_string()).collect(),
            statistics: JsonStatistics {
                total_customers: stats.total_customers(),
                served: stats.served(),
                left: stats.left(),
                total_wait_time: stats.total_wait_time(),
                average_wait: stats.average_wait(),
            },
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => format!("{}\n", json),
            Err(err) => format!("{{\"error\": \"{}\"}}\n", err),
        }
    }
}
