//! Report rendering and logging
//!
//! This module turns metrics summaries into the HTML dashboard and the
//! Markdown summary, and hosts the structured logging helpers.

pub mod dashboard;
pub mod format;
pub mod logging;
pub mod renderer;
pub mod status;
pub mod summary;

// Re-export commonly used items
pub use dashboard::HtmlDashboard;
pub use renderer::{RenderedReports, ReportData, ReportRenderer};
pub use status::Status;
pub use summary::MarkdownSummary;
