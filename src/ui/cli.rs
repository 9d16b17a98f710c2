// Command-line interface definitions and parsing for perfsummary

use crate::config::CliConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory with the results files; reports are written here too (default: reports)
    #[arg(long, value_name = "DIR", help_heading = "Core Options")]
    pub reports_dir: Option<String>,

    /// Link target for "View detailed reports" in the summary
    #[arg(long, value_name = "URL", help_heading = "Core Options")]
    pub details_url: Option<String>,

    // Output & Verbosity
    /// Suppress status lines on stdout
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, conflicts_with = "config", help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed CLI arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        reports_dir: cli.reports_dir.clone(),
        details_url: cli.details_url.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
        verbose: cli.verbose,
        quiet: cli.quiet,
    }
}
