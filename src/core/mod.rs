//! Core types and foundational components
//!
//! This module contains the input and metrics data types, error handling,
//! and constants used throughout the application.

pub mod constants;
pub mod error;
pub mod exit_codes;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{PerfSummaryError, Result};
pub use exit_codes::ExitCode;
pub use types::{ExecutionRecord, MetricsSummary, RunResultsDocument};
