use clap::Parser;
use perfsummary::config::{CliConfig, Config};
use perfsummary::core::constants::messages;
use perfsummary::core::{ExitCode, PerfSummaryError};
use perfsummary::reporting::logging;
use perfsummary::runner;
use perfsummary::ui::{Cli, OutputSettings, cli_to_config};

fn main() {
    let cli = Cli::parse();
    let cli_config = cli_to_config(&cli);

    let config = match load_and_merge_config(&cli_config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {e}", messages::ERROR_PREFIX);
            std::process::exit(ExitCode::from_error(&e).as_i32());
        }
    };

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);

    let output = OutputSettings::new(cli_config.quiet);
    output.display_start();

    match runner::run(&config) {
        Ok(outcome) => {
            output.display_done();
            output.display_summaries(outcome.performance.as_ref(), outcome.load.as_ref());
            std::process::exit(ExitCode::Success.as_i32());
        }
        Err(e) => {
            logging::log_error("Run aborted", Some(&e));
            eprintln!("{}: {e}", messages::ERROR_PREFIX);
            std::process::exit(ExitCode::from_error(&e).as_i32());
        }
    }
}

/// Load the config file (explicit, discovered or none) and apply CLI overrides
fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, PerfSummaryError> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()?
    };

    // CLI takes precedence
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
