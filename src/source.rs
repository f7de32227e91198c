use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random draws consumed by the shop. Each method is an independent stream.
pub trait StochasticSource {
    fn customer_type(&mut self) -> f64;
    fn inter_arrival_gap(&mut self) -> f64;
    fn rest_decision(&mut self) -> f64;
    fn rest_duration(&mut self) -> f64;
    fn service_duration(&mut self) -> f64;
}

pub struct RandomGenerator {
    arrival: StdRng,
    service: StdRng,
    rest: StdRng,
    rest_period: StdRng,
    customer_type: StdRng,
    arrival_rate: f64,
    service_rate: f64,
    rest_rate: f64,
}

impl RandomGenerator {
    pub fn new(seed: u64, arrival_rate: f64, service_rate: f64, rest_rate: f64) -> Self {
        Self {
            arrival: StdRng::seed_from_u64(seed),
            service: StdRng::seed_from_u64(seed.wrapping_add(1)),
            rest: StdRng::seed_from_u64(seed.wrapping_add(2)),
            rest_period: StdRng::seed_from_u64(seed.wrapping_add(3)),
            customer_type: StdRng::seed_from_u64(seed.wrapping_add(4)),
            arrival_rate,
            service_rate,
            rest_rate,
        }
    }
}

fn exponential(rng: &mut StdRng, rate: f64) -> f64 {
    let mut u = rng.gen::<f64>();
    if u <= f64::MIN_POSITIVE {
        u = f64::MIN_POSITIVE;
    }
    -u.ln() / rate
}

impl StochasticSource for RandomGenerator {
    fn customer_type(&mut self) -> f64 {
        self.customer_type.gen::<f64>()
    }

    fn inter_arrival_gap(&mut self) -> f64 {
        exponential(&mut self.arrival, self.arrival_rate)
    }

    fn rest_decision(&mut self) -> f64 {
        self.rest.gen::<f64>()
    }

    fn rest_duration(&mut self) -> f64 {
        exponential(&mut self.rest_period, self.rest_rate)
    }

    fn service_duration(&mut self) -> f64 {
        exponential(&mut self.service, self.service_rate)
    }
}

#[derive(Clone, Debug)]
struct Script {
    values: Vec<f64>,
    cursor: usize,
    draws: usize,
}

impl Script {
    fn constant(value: f64) -> Self {
        Self::from(vec![value])
    }

    fn next(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        self.draws += 1;
        value
    }
}

impl From<Vec<f64>> for Script {
    fn from(values: Vec<f64>) -> Self {
        let values = if values.is_empty() { vec![0.0] } else { values };
        Self {
            values,
            cursor: 0,
            draws: 0,
        }
    }
}

/// Number of draws taken from each stream of a [`ScriptedSource`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DrawCounts {
    pub customer_type: usize,
    pub inter_arrival_gap: usize,
    pub rest_decision: usize,
    pub rest_duration: usize,
    pub service_duration: usize,
}

/// Replays fixed sequences, cycling when a sequence runs out.
///
/// Defaults never produce greedy customers or rests, space arrivals one time
/// unit apart and serve in one time unit.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    customer_type: Script,
    inter_arrival_gap: Script,
    rest_decision: Script,
    rest_duration: Script,
    service_duration: Script,
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self {
            customer_type: Script::constant(1.0),
            inter_arrival_gap: Script::constant(1.0),
            rest_decision: Script::constant(1.0),
            rest_duration: Script::constant(1.0),
            service_duration: Script::constant(1.0),
        }
    }
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customer_types(mut self, values: Vec<f64>) -> Self {
        self.customer_type = values.into();
        self
    }

    pub fn with_inter_arrival_gaps(mut self, values: Vec<f64>) -> Self {
        self.inter_arrival_gap = values.into();
        self
    }

    pub fn with_rest_decisions(mut self, values: Vec<f64>) -> Self {
        self.rest_decision = values.into();
        self
    }

    pub fn with_rest_durations(mut self, values: Vec<f64>) -> Self {
        self.rest_duration = values.into();
        self
    }

    pub fn with_service_durations(mut self, values: Vec<f64>) -> Self {
        self.service_duration = values.into();
        self
    }

    pub fn draws(&self) -> DrawCounts {
        DrawCounts {
            customer_type: self.customer_type.draws,
            inter_arrival_gap: self.inter_arrival_gap.draws,
            rest_decision: self.rest_decision.draws,
            rest_duration: self.rest_duration.draws,
            service_duration: self.service_duration.draws,
        }
    }
}

impl StochasticSource for ScriptedSource {
    fn customer_type(&mut self) -> f64 {
        self.customer_type.next()
    }

    fn inter_arrival_gap(&mut self) -> f64 {
        self.inter_arrival_gap.next()
    }

    fn rest_decision(&mut self) -> f64 {
        self.rest_decision.next()
    }

    fn rest_duration(&mut self) -> f64 {
        self.rest_duration.next()
    }

    fn service_duration(&mut self) -> f64 {
        self.service_duration.next()
    }
}
