//! Input document and derived metrics types.
//!
//! The input structs mirror the subset of the Newman JSON reporter format
//! that the analysis needs; every other field in the document is ignored.

use serde::Deserialize;

/// Root of a results document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunResultsDocument {
    pub run: Run,
}

/// The `run` object of a results document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Run {
    pub stats: RunStats,
    pub executions: Vec<ExecutionRecord>,
    pub timings: RunTimings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunStats {
    pub requests: RequestStats,
}

/// Request counters reported by the test runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RequestStats {
    pub total: u64,
    pub failed: u64,
}

/// Start and completion instants in epoch milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RunTimings {
    pub started: f64,
    pub completed: f64,
}

/// One observed request/response interaction.
///
/// `response` is absent when the request never got an answer, e.g. a
/// connection failure.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ExecutionRecord {
    #[serde(default)]
    pub response: Option<ExecutionResponse>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ExecutionResponse {
    #[serde(default, rename = "responseTime")]
    pub response_time: Option<f64>,
}

impl ExecutionRecord {
    /// Build a record with the given response time, or none at all
    pub fn with_response_time(response_time: Option<f64>) -> Self {
        Self {
            response: Some(ExecutionResponse { response_time }),
        }
    }

    /// Response time in milliseconds, if a response was captured
    pub fn response_time(&self) -> Option<f64> {
        self.response.as_ref().and_then(|r| r.response_time)
    }
}

impl RunResultsDocument {
    pub fn total_requests(&self) -> u64 {
        self.run.stats.requests.total
    }

    pub fn failed_requests(&self) -> u64 {
        self.run.stats.requests.failed
    }

    pub fn executions(&self) -> &[ExecutionRecord] {
        &self.run.executions
    }

    /// Wall time between start and completion, in the input's units
    pub fn elapsed(&self) -> f64 {
        self.run.timings.completed - self.run.timings.started
    }
}

/// Aggregate statistics derived from one results document.
///
/// All response times are milliseconds. Built once by the analyzer and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub total_requests: u64,
    pub failed_requests: u64,
    /// Percentage of successful requests rounded to two decimals.
    /// `None` when the run made no requests at all.
    pub success_rate: Option<f64>,
    pub avg_response_time: f64,
    pub min_response_time: f64,
    pub max_response_time: f64,
    pub p95_response_time: f64,
    pub p99_response_time: f64,
    pub total_time: f64,
    /// Number of executions that carried a response time
    pub response_samples: usize,
}
