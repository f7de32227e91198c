use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::{Error, Result};

#[derive(Parser, Debug)]
#[command(name = "shop-sim", version, about = "Discrete-event simulation of a queueing shop")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the simulation and print the event log and summary.
    Run(RunArgs),
    /// Print the resolved configuration without running it.
    ShowConfig(ConfigArgs),
    /// Print the supported output formats.
    ListFormats,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
    #[arg(long, value_enum, default_value_t = FormatArg::Human)]
    pub format: FormatArg,
    #[arg(long, help = "Shorthand for --format summary")]
    pub summary: bool,
    #[arg(long, default_value = "warn", help = "Log level for diagnostics on stderr")]
    pub log_level: String,
}

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    #[arg(long, help = "TOML or JSON config file")]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        help = "Whitespace-separated parameters (seed servers self-checks queue-max customers \
                arrival-rate service-rate rest-rate rest-prob greedy-fraction); '-' reads stdin"
    )]
    pub input: Option<String>,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub servers: Option<usize>,
    #[arg(long)]
    pub self_checks: Option<usize>,
    #[arg(long)]
    pub queue_max: Option<usize>,
    #[arg(long)]
    pub customers: Option<usize>,
    #[arg(long)]
    pub arrival_rate: Option<f64>,
    #[arg(long)]
    pub service_rate: Option<f64>,
    #[arg(long)]
    pub rest_rate: Option<f64>,
    #[arg(long)]
    pub rest_prob: Option<f64>,
    #[arg(long)]
    pub greedy_fraction: Option<f64>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Human,
    Summary,
    Json,
}

impl FormatArg {
    pub fn all() -> &'static [FormatArg] {
        &[FormatArg::Human, FormatArg::Summary, FormatArg::Json]
    }

    pub fn name(self) -> &'static str {
        match self {
            FormatArg::Human => "human",
            FormatArg::Summary => "summary",
            FormatArg::Json => "json",
        }
    }
}

impl RunArgs {
    pub fn resolved_format(&self) -> FormatArg {
        if self.summary {
            FormatArg::Summary
        } else {
            self.format
        }
    }
}

pub fn parse_args() -> Result<Cli> {
    Cli::try_parse().map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => Error::Cli(err.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_accepts_individual_flags() {
        let cli = Cli::try_parse_from([
            "shop-sim",
            "run",
            "--seed",
            "1",
            "--servers",
            "2",
            "--queue-max",
            "1",
            "--customers",
            "5",
            "--arrival-rate",
            "1.0",
            "--service-rate",
            "1.0",
            "--format",
            "json",
        ])
        .unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.config.seed, Some(1));
        assert_eq!(args.config.servers, Some(2));
        assert_eq!(args.config.self_checks, None);
        assert_eq!(args.resolved_format(), FormatArg::Json);
    }

    #[test]
    fn summary_flag_overrides_format() {
        let cli = Cli::try_parse_from(["shop-sim", "run", "--summary", "--format", "json"]).unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.resolved_format(), FormatArg::Summary);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["shop-sim", "run", "--format", "xml"]).is_err());
    }

    #[test]
    fn format_names_match_value_enum() {
        for format in FormatArg::all() {
            let parsed = FormatArg::from_str(format.name(), false).unwrap();
            assert_eq!(parsed, *format);
        }
    }
}
