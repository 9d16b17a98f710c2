//! End-to-end run: analyze both sources, render, then write.

use log::debug;

use crate::analysis::{AnalyzeResults, ResultAnalyzer};
use crate::config::Config;
use crate::core::error::Result;
use crate::core::types::MetricsSummary;
use crate::reporting::logging;
use crate::reporting::renderer::{RenderedReports, ReportData, ReportRenderer, current_timestamp};

use std::path::PathBuf;

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub performance: Option<MetricsSummary>,
    pub load: Option<MetricsSummary>,
    pub reports: RenderedReports,
    pub dashboard_path: PathBuf,
    pub summary_path: PathBuf,
}

/// Generate the reports described by `config`, stamped with the current time
pub fn run(config: &Config) -> Result<RunOutcome> {
    run_with(config, &ResultAnalyzer::new(), current_timestamp())
}

/// Generate the reports with an explicit analyzer and timestamp.
///
/// Both sources are analyzed before anything is rendered, and both documents
/// are rendered before anything is written, so a bad source leaves no
/// reports behind.
pub fn run_with<A: AnalyzeResults>(
    config: &Config,
    analyzer: &A,
    timestamp: String,
) -> Result<RunOutcome> {
    logging::log_config_info(config);

    let performance = analyzer.analyze(&config.performance_results_path())?;
    let load = analyzer.analyze(&config.load_test_results_path())?;
    logging::log_summary("Performance", performance.as_ref());
    logging::log_summary("Load", load.as_ref());

    let data = ReportData {
        performance,
        load,
        timestamp,
    };
    let reports = ReportRenderer::render(&data, config.details_url());
    debug!(
        "Rendered dashboard ({} bytes) and summary ({} bytes)",
        reports.dashboard.len(),
        reports.summary.len()
    );

    let dashboard_path = config.dashboard_path();
    let summary_path = config.summary_path();
    ReportRenderer::write(&reports, &dashboard_path, &summary_path)?;
    logging::log_reports_written(&dashboard_path, &summary_path);

    Ok(RunOutcome {
        performance: data.performance,
        load: data.load,
        reports,
        dashboard_path,
        summary_path,
    })
}
