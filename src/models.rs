use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SimConfig {
    pub seed: u64,
    pub servers: usize,
    #[serde(default)]
    pub self_checks: usize,
    pub queue_max: usize,
    pub customers: usize,
    pub arrival_rate: f64,
    pub service_rate: f64,
    #[serde(default = "default_rest_rate")]
    pub rest_rate: f64,
    #[serde(default)]
    pub rest_prob: f64,
    #[serde(default)]
    pub greedy_fraction: f64,
}

fn default_rest_rate() -> f64 {
    1.0
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        if self.servers + self.self_checks == 0 {
            return Err(Error::EmptyServers);
        }
        check_rate("arrival rate", self.arrival_rate)?;
        check_rate("service rate", self.service_rate)?;
        check_probability("rest probability", self.rest_prob)?;
        if self.rest_prob > 0.0 {
            check_rate("rest rate", self.rest_rate)?;
        }
        check_probability("greedy fraction", self.greedy_fraction)?;
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidRate { name, value })
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidProbability { name, value })
    }
}

impl fmt::Display for SimConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Seed: {}", self.seed)?;
        writeln!(f, "Servers: {}", self.servers)?;
        writeln!(f, "Self-checks: {}", self.self_checks)?;
        writeln!(f, "Queue max: {}", self.queue_max)?;
        writeln!(f, "Customers: {}", self.customers)?;
        writeln!(f, "Arrival rate: {}", self.arrival_rate)?;
        writeln!(f, "Service rate: {}", self.service_rate)?;
        writeln!(f, "Rest rate: {}", self.rest_rate)?;
        writeln!(f, "Rest probability: {}", self.rest_prob)?;
        writeln!(f, "Greedy fraction: {}", self.greedy_fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimConfig {
        SimConfig {
            seed: 1,
            servers: 2,
            self_checks: 0,
            queue_max: 2,
            customers: 10,
            arrival_rate: 1.0,
            service_rate: 1.0,
            rest_rate: 0.1,
            rest_prob: 0.5,
            greedy_fraction: 0.5,
        }
    }

    #[test]
    fn accepts_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn rejects_shop_without_servers() {
        let err = SimConfig {
            servers: 0,
            ..config()
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "at least one server or self-check server is required"
        );
    }

    #[test]
    fn self_checks_alone_are_enough() {
        let config = SimConfig {
            servers: 0,
            self_checks: 2,
            ..config()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_rates() {
        let err = SimConfig {
            service_rate: 0.0,
            ..config()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "service rate must be > 0 (got 0)");
    }

    #[test]
    fn rest_rate_only_matters_when_servers_rest() {
        let resting = SimConfig {
            rest_rate: 0.0,
            ..config()
        };
        assert!(resting.validate().is_err());

        let never_resting = SimConfig {
            rest_rate: 0.0,
            rest_prob: 0.0,
            ..config()
        };
        assert!(never_resting.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_probabilities() {
        let err = SimConfig {
            greedy_fraction: 1.5,
            ..config()
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "greedy fraction must be between 0 and 1 (got 1.5)"
        );
    }

    #[test]
    fn optional_fields_have_defaults() {
        let parsed: SimConfig = toml::from_str(
            r#"
seed = 3
servers = 1
queue_max = 1
customers = 5
arrival_rate = 1.0
service_rate = 2.0
"#,
        )
        .unwrap();
        assert_eq!(parsed.self_checks, 0);
        assert_eq!(parsed.rest_rate, 1.0);
        assert_eq!(parsed.rest_prob, 0.0);
        assert_eq!(parsed.greedy_fraction, 0.0);
    }
}
