use shop_sim::cli::{self, Command, FormatArg};
use shop_sim::config;
use shop_sim::engine;
use shop_sim::error::Result;
use shop_sim::logging;
use shop_sim::output::{Formatter, HumanFormatter, JsonFormatter, SummaryFormatter};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::parse_args()?;

    match cli.command {
        Command::Run(args) => {
            logging::init_logging(&args.log_level);
            let config = config::build_config(&args.config)?;
            let format = args.resolved_format();
            let result = match format {
                FormatArg::Summary => engine::run_simulation_summary(&config)?,
                FormatArg::Human | FormatArg::Json => engine::run_simulation(&config)?,
            };

            let formatter = formatter_for(format);
            print!("{}", formatter.write(&result));
        }
        Command::ShowConfig(args) => {
            let config = config::build_config(&args)?;
            print!("{}", config);
        }
        Command::ListFormats => {
            for format in FormatArg::all() {
                println!("{}", format.name());
            }
        }
    }

    Ok(())
}

fn formatter_for(format: FormatArg) -> Box<dyn Formatter> {
    match format {
        FormatArg::Human => Box::new(HumanFormatter),
        FormatArg::Summary => Box::new(SummaryFormatter),
        FormatArg::Json => Box::new(JsonFormatter),
    }
}
