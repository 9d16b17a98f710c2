//! Status lines written to stdout for CI logs

use crate::core::constants::messages;
use crate::core::types::MetricsSummary;
use crate::reporting::format::{format_avg_response, format_success_percent};
use crate::reporting::status;
use crate::ui::color::{colorize, status_color};

/// Label of the performance category in status lines
pub const PERFORMANCE_LABEL: &str = "Performance Test";
/// Label of the load-test category in status lines
pub const LOAD_TEST_LABEL: &str = "Load Test";

/// Whether status lines are printed at all
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputSettings {
    pub quiet: bool,
}

impl OutputSettings {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn display_start(&self) {
        if !self.quiet {
            println!("{}", messages::GENERATING);
        }
    }

    pub fn display_done(&self) {
        if !self.quiet {
            println!("{}", messages::GENERATED);
        }
    }

    /// One line per category that had data
    pub fn display_summaries(
        &self,
        performance: Option<&MetricsSummary>,
        load: Option<&MetricsSummary>,
    ) {
        if self.quiet {
            return;
        }
        for (label, summary) in [(PERFORMANCE_LABEL, performance), (LOAD_TEST_LABEL, load)] {
            if let Some(summary) = summary {
                println!("{}", summary_line(label, summary, true));
            }
        }
    }
}

/// `<label> - Success Rate: <rate>, Avg Response Time: <avg>ms`
pub fn summary_line(label: &str, summary: &MetricsSummary, colored: bool) -> String {
    let rate = format_success_percent(summary.success_rate);
    let avg = format!("{}ms", format_avg_response(summary));

    let (rate, avg) = if colored {
        (
            colorize(
                &rate,
                status_color(status::success_rate_status(summary.success_rate)),
            ),
            colorize(
                &avg,
                status_color(status::avg_response_status(summary.avg_response_time)),
            ),
        )
    } else {
        (rate, avg)
    };

    format!("{label} - Success Rate: {rate}, Avg Response Time: {avg}")
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_summary_line() {
        assert_eq!(
            summary_line(PERFORMANCE_LABEL, &create_test_summary(), false),
            "Performance Test - Success Rate: 90.00%, Avg Response Time: 300.00ms"
        );
    }

    #[test]
    fn test_summary_line_without_samples() {
        let mut summary = create_test_summary();
        summary.response_samples = 0;
        summary.avg_response_time = 0.0;
        summary.success_rate = None;

        assert_eq!(
            summary_line(LOAD_TEST_LABEL, &summary, false),
            "Load Test - Success Rate: N/A, Avg Response Time: 0ms"
        );
    }

    #[test]
    fn test_quiet_settings_print_nothing() {
        let settings = OutputSettings::new(true);
        settings.display_start();
        settings.display_summaries(Some(&create_test_summary()), None);
        settings.display_done();
    }
}
