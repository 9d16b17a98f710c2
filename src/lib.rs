//! Turns API test-run results into an HTML dashboard and a Markdown summary.

pub mod analysis;
pub mod config;
pub mod core;
pub mod reporting;
pub mod runner;
pub mod ui;

pub use crate::core::{ExecutionRecord, MetricsSummary, PerfSummaryError, Result, RunResultsDocument};
pub use crate::runner::{RunOutcome, run};
