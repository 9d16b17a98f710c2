use crate::config::Config;
use crate::core::types::MetricsSummary;
use crate::reporting::format::{format_number, format_success_percent};
use log::{debug, error, info};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the resolved configuration
pub fn log_config_info(config: &Config) {
    info!("Reports directory: {}", config.reports_dir().display());
    debug!(
        "Inputs: performance={}, load={}",
        config.performance_results_path().display(),
        config.load_test_results_path().display()
    );
    debug!(
        "Outputs: dashboard={}, summary={}",
        config.dashboard_path().display(),
        config.summary_path().display()
    );
    debug!("Details URL: {}", config.details_url());
}

/// Log the metrics derived for one category
pub fn log_summary(category: &str, summary: Option<&MetricsSummary>) {
    match summary {
        Some(s) => info!(
            "{category}: success={}, avg={}ms, p95={}ms, p99={}ms, min={}ms, max={}ms, total_time={}ms",
            format_success_percent(s.success_rate),
            s.avg_response_time,
            format_number(s.p95_response_time),
            format_number(s.p99_response_time),
            format_number(s.min_response_time),
            format_number(s.max_response_time),
            format_number(s.total_time)
        ),
        None => info!("{category}: no data"),
    }
}

/// Log the locations of the written artifacts
pub fn log_reports_written(dashboard: &Path, summary: &Path) {
    info!(
        "Reports written: {} and {}",
        dashboard.display(),
        summary.display()
    );
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn create_test_summary() -> MetricsSummary {
        MetricsSummary {
            total_requests: 10,
            failed_requests: 1,
            success_rate: Some(90.0),
            avg_response_time: 300.0,
            min_response_time: 100.0,
            max_response_time: 500.0,
            p95_response_time: 500.0,
            p99_response_time: 500.0,
            total_time: 12_345.0,
            response_samples: 5,
        }
    }

    #[test]
    fn test_logger_initialization_is_repeatable() {
        init_logger(true, false);
        init_logger(false, true);
        init_logger(false, false);
        init_logger(true, true);
    }

    #[test]
    fn test_log_config_info_with_defaults() {
        log_config_info(&Config::default());
    }

    #[test]
    fn test_log_summary_present_and_absent() {
        log_summary("Performance", Some(&create_test_summary()));
        log_summary("Load", None);
    }

    #[test]
    fn test_log_reports_written() {
        log_reports_written(Path::new("reports/index.html"), Path::new("reports/summary.md"));
    }

    #[test]
    fn test_log_error_with_and_without_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        log_error("Failed to read file", Some(&io_error));
        log_error("Something went wrong", None);
    }
}
