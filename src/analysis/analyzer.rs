use log::{debug, info};

use crate::analysis::stats;
use crate::core::constants::percentiles;
use crate::core::error::{PerfSummaryError, Result};
use crate::core::types::{MetricsSummary, RunResultsDocument};

use std::fs;
use std::io;
use std::path::Path;

pub trait AnalyzeResults {
    /// Load the results document at `source` and derive its metrics.
    ///
    /// Returns `Ok(None)` when no document exists at `source`.
    fn analyze(&self, source: &Path) -> Result<Option<MetricsSummary>>;
}

pub struct ResultAnalyzer {}

impl Default for ResultAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultAnalyzer {
    pub fn new() -> Self {
        ResultAnalyzer {}
    }

    /// Read and parse a results document.
    ///
    /// A file that does not exist yields `Ok(None)`; every other read or
    /// parse problem is an error.
    pub fn load_document(source: &Path) -> Result<Option<RunResultsDocument>> {
        let content = match fs::read_to_string(source) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(PerfSummaryError::SourceRead {
                    path: source.to_path_buf(),
                    source: err,
                });
            }
        };

        let document: RunResultsDocument = serde_json::from_str(&content)
            .map_err(|e| PerfSummaryError::malformed(source, e))?;

        let total = document.total_requests();
        let failed = document.failed_requests();
        if failed > total {
            return Err(PerfSummaryError::malformed(
                source,
                format!("failed request count ({failed}) exceeds total ({total})"),
            ));
        }

        Ok(Some(document))
    }

    /// Derive the metrics of a parsed document
    pub fn summarize(document: &RunResultsDocument) -> MetricsSummary {
        let total_requests = document.total_requests();
        let failed_requests = document.failed_requests();

        let response_times: Vec<f64> = document
            .executions()
            .iter()
            .filter_map(|execution| execution.response_time())
            .collect();

        let avg_response_time = stats::mean(&response_times)
            .map(stats::round2)
            .unwrap_or(0.0);
        let (min_response_time, max_response_time) =
            stats::min_max(&response_times).unwrap_or((0.0, 0.0));

        let sorted = stats::sorted(&response_times);
        let p95_response_time = stats::nearest_rank(&sorted, percentiles::P95).unwrap_or(0.0);
        let p99_response_time = stats::nearest_rank(&sorted, percentiles::P99).unwrap_or(0.0);

        MetricsSummary {
            total_requests,
            failed_requests,
            success_rate: stats::success_rate(total_requests, failed_requests),
            avg_response_time,
            min_response_time,
            max_response_time,
            p95_response_time,
            p99_response_time,
            total_time: document.elapsed(),
            response_samples: response_times.len(),
        }
    }
}

impl AnalyzeResults for ResultAnalyzer {
    fn analyze(&self, source: &Path) -> Result<Option<MetricsSummary>> {
        let Some(document) = Self::load_document(source)? else {
            info!("No results at {}, skipping", source.display());
            return Ok(None);
        };

        debug!(
            "Loaded {} with {} execution(s)",
            source.display(),
            document.executions().len()
        );

        let summary = Self::summarize(&document);
        debug!(
            "{}: {} request(s), {} failed, {} response sample(s)",
            source.display(),
            summary.total_requests,
            summary.failed_requests,
            summary.response_samples
        );
        Ok(Some(summary))
    }
}
