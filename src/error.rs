use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("at least one server or self-check server is required")]
    EmptyServers,
    #[error("{name} must be > 0 (got {value})")]
    InvalidRate { name: &'static str, value: f64 },
    #[error("{name} must be between 0 and 1 (got {value})")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("missing required parameter '--{0}'")]
    MissingParameter(&'static str),
    #[error("invalid parameter input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    ConfigIo(String),
    #[error("{0}")]
    ConfigParse(String),
    #[error("unsupported config format '{0}'")]
    UnsupportedConfigFormat(String),
    #[error("{0}")]
    Cli(String),
}

pub type Result<T> = std::result::Result<T, Error>;
