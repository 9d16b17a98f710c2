//! Results analysis
//!
//! This module loads test-run result documents and derives the
//! aggregate metrics shown in the reports.

pub mod analyzer;
pub mod stats;

// Re-export commonly used items
pub use analyzer::{AnalyzeResults, ResultAnalyzer};
