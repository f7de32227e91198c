use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::cli::ConfigArgs;
use crate::error::{Error, Result};
use crate::models::SimConfig;

pub fn load_config(path: &Path) -> Result<SimConfig> {
    let contents = fs::read_to_string(path).map_err(|err| {
        Error::ConfigIo(format!(
            "failed to read config '{}': {}",
            path.display(),
            err
        ))
    })?;
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .unwrap_or("");

    match ext {
        "toml" => toml::from_str(&contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse TOML: {}", err))),
        "json" => serde_json::from_str(&contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse JSON: {}", err))),
        "" => Err(Error::UnsupportedConfigFormat("unknown".to_string())),
        _ => Err(Error::UnsupportedConfigFormat(ext.to_string())),
    }
}

/// Reads the positional parameter list from a file, or from stdin for `-`.
pub fn read_params(source: &str) -> Result<SimConfig> {
    let contents = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|err| Error::ConfigIo(format!("failed to read stdin: {}", err)))?;
        buf
    } else {
        fs::read_to_string(source).map_err(|err| {
            Error::ConfigIo(format!("failed to read input '{}': {}", source, err))
        })?
    };
    parse_params(&contents)
}

/// Parses `seed servers self-checks queue-max customers arrival-rate
/// service-rate rest-rate rest-prob greedy-fraction`.
pub fn parse_params(input: &str) -> Result<SimConfig> {
    let mut tokens = input.split_whitespace();
    let config = SimConfig {
        seed: next_param(&mut tokens, "seed")?,
        servers: next_param(&mut tokens, "servers")?,
        self_checks: next_param(&mut tokens, "self-checks")?,
        queue_max: next_param(&mut tokens, "queue-max")?,
        customers: next_param(&mut tokens, "customers")?,
        arrival_rate: next_param(&mut tokens, "arrival-rate")?,
        service_rate: next_param(&mut tokens, "service-rate")?,
        rest_rate: next_param(&mut tokens, "rest-rate")?,
        rest_prob: next_param(&mut tokens, "rest-prob")?,
        greedy_fraction: next_param(&mut tokens, "greedy-fraction")?,
    };
    if let Some(extra) = tokens.next() {
        return Err(Error::InvalidInput(format!("unexpected trailing value '{}'", extra)));
    }
    Ok(config)
}

fn next_param<'a, T, I>(tokens: &mut I, name: &str) -> Result<T>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| Error::InvalidInput(format!("missing value for {}", name)))?;
    token
        .parse()
        .map_err(|_| Error::InvalidInput(format!("invalid {} '{}'", name, token)))
}

/// Resolves the run configuration: a config file or parameter list as the
/// base, individual flags on top, then validation.
pub fn build_config(args: &ConfigArgs) -> Result<SimConfig> {
    let base = match (&args.config, &args.input) {
        (Some(path), _) => Some(load_config(path)?),
        (None, Some(input)) => Some(read_params(input)?),
        (None, None) => None,
    };

    let config = match base {
        Some(base) => SimConfig {
            seed: args.seed.unwrap_or(base.seed),
            servers: args.servers.unwrap_or(base.servers),
            self_checks: args.self_checks.unwrap_or(base.self_checks),
            queue_max: args.queue_max.unwrap_or(base.queue_max),
            customers: args.customers.unwrap_or(base.customers),
            arrival_rate: args.arrival_rate.unwrap_or(base.arrival_rate),
            service_rate: args.service_rate.unwrap_or(base.service_rate),
            rest_rate: args.rest_rate.unwrap_or(base.rest_rate),
            rest_prob: args.rest_prob.unwrap_or(base.rest_prob),
            greedy_fraction: args.greedy_fraction.unwrap_or(base.greedy_fraction),
        },
        None => SimConfig {
            seed: args.seed.unwrap_or(1),
            servers: required(args.servers, "servers")?,
            self_checks: args.self_checks.unwrap_or(0),
            queue_max: required(args.queue_max, "queue-max")?,
            customers: required(args.customers, "customers")?,
            arrival_rate: required(args.arrival_rate, "arrival-rate")?,
            service_rate: required(args.service_rate, "service-rate")?,
            rest_rate: args.rest_rate.unwrap_or(1.0),
            rest_prob: args.rest_prob.unwrap_or(0.0),
            greedy_fraction: args.greedy_fraction.unwrap_or(0.0),
        },
    };

    config.validate()?;
    Ok(config)
}

fn required<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(Error::MissingParameter(name))
}
