use chrono::{SecondsFormat, Utc};
use log::debug;

use crate::core::error::{PerfSummaryError, Result};
use crate::core::types::MetricsSummary;
use crate::reporting::dashboard::HtmlDashboard;
use crate::reporting::summary::MarkdownSummary;

use std::fs;
use std::path::Path;

/// Everything the renderers need; either summary may be missing
#[derive(Debug, Clone, PartialEq)]
pub struct ReportData {
    pub performance: Option<MetricsSummary>,
    pub load: Option<MetricsSummary>,
    /// Generation time shown on the dashboard
    pub timestamp: String,
}

/// The two generated documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReports {
    pub dashboard: String,
    pub summary: String,
}

pub struct ReportRenderer;

impl ReportRenderer {
    /// Render both documents. Pure: same data, same output.
    pub fn render(data: &ReportData, details_url: &str) -> RenderedReports {
        RenderedReports {
            dashboard: HtmlDashboard::render(data),
            summary: MarkdownSummary::render(data, details_url),
        }
    }

    /// Write both documents, dashboard first
    pub fn write(
        reports: &RenderedReports,
        dashboard_path: &Path,
        summary_path: &Path,
    ) -> Result<()> {
        write_artifact(dashboard_path, &reports.dashboard)?;
        write_artifact(summary_path, &reports.summary)?;
        Ok(())
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2025-01-01T12:00:00.000Z`
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn write_artifact(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| PerfSummaryError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}
