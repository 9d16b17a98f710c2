//! Threshold-based status classification for report metrics.

use crate::core::constants::{display, thresholds};

/// Health of a single metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Good,
    Warning,
    Bad,
    /// Shown for context only, never judged
    Info,
}

impl Status {
    /// CSS class used on dashboard cards; informational cards stay neutral
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Status::Good => Some("success"),
            Status::Warning => Some("warning"),
            Status::Bad => Some("error"),
            Status::Info => None,
        }
    }

    /// Glyph used in the Markdown summary
    pub fn emoji(self) -> &'static str {
        match self {
            Status::Good => display::SUCCESS_EMOJI,
            Status::Warning => display::WARNING_EMOJI,
            Status::Bad => display::ERROR_EMOJI,
            Status::Info => display::INFO_EMOJI,
        }
    }
}

/// Higher is better. A run without requests has no rate and counts as bad.
pub fn success_rate_status(rate: Option<f64>) -> Status {
    match rate {
        Some(rate) if rate >= thresholds::SUCCESS_RATE_GOOD => Status::Good,
        Some(rate) if rate >= thresholds::SUCCESS_RATE_WARNING => Status::Warning,
        _ => Status::Bad,
    }
}

pub fn avg_response_status(ms: f64) -> Status {
    at_most(
        ms,
        thresholds::AVG_RESPONSE_GOOD_MS,
        thresholds::AVG_RESPONSE_WARNING_MS,
    )
}

pub fn p95_response_status(ms: f64) -> Status {
    at_most(
        ms,
        thresholds::P95_RESPONSE_GOOD_MS,
        thresholds::P95_RESPONSE_WARNING_MS,
    )
}

pub fn max_response_status(ms: f64) -> Status {
    at_most(
        ms,
        thresholds::MAX_RESPONSE_GOOD_MS,
        thresholds::MAX_RESPONSE_WARNING_MS,
    )
}

pub fn failed_requests_status(failed: u64) -> Status {
    if failed == 0 {
        Status::Good
    } else {
        Status::Bad
    }
}

// lower is better; both bounds inclusive
fn at_most(value: f64, good: f64, warning: f64) -> Status {
    if value <= good {
        Status::Good
    } else if value <= warning {
        Status::Warning
    } else {
        Status::Bad
    }
}
