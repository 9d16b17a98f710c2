use crate::core::constants::display;
use crate::core::types::MetricsSummary;
use crate::reporting::format::{format_avg_response, format_number, format_success_percent};
use crate::reporting::renderer::ReportData;
use crate::reporting::status::{self, Status};

/// One `| Metric | Value | Status |` row
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub metric: &'static str,
    pub value: String,
    pub status: Status,
}

/// Markdown summary generator, meant to be pasted into review comments
pub struct MarkdownSummary;

impl MarkdownSummary {
    /// Render the complete Markdown document
    pub fn render(data: &ReportData, details_url: &str) -> String {
        let performance = data
            .performance
            .as_ref()
            .map(|summary| Self::generate_table(&Self::performance_rows(summary)))
            .unwrap_or_else(|| display::NO_PERFORMANCE_DATA.to_string());
        let load = data
            .load
            .as_ref()
            .map(|summary| Self::generate_table(&Self::load_test_rows(summary)))
            .unwrap_or_else(|| display::NO_LOAD_TEST_DATA.to_string());

        format!(
            "### Performance Test Results\n\n{performance}\n\n### Load Test Results\n\n{load}\n\n🔗 [View detailed reports]({details_url})\n"
        )
    }

    /// Rows for the functional performance run
    pub fn performance_rows(summary: &MetricsSummary) -> Vec<SummaryRow> {
        vec![
            Self::success_rate_row(summary),
            Self::avg_response_row(summary),
            SummaryRow {
                metric: "95th Percentile",
                value: format!("{}ms", format_number(summary.p95_response_time)),
                status: status::p95_response_status(summary.p95_response_time),
            },
            Self::total_requests_row(summary),
            SummaryRow {
                metric: "Failed Requests",
                value: summary.failed_requests.to_string(),
                status: status::failed_requests_status(summary.failed_requests),
            },
        ]
    }

    /// Rows for the load-test run
    pub fn load_test_rows(summary: &MetricsSummary) -> Vec<SummaryRow> {
        vec![
            Self::success_rate_row(summary),
            Self::avg_response_row(summary),
            SummaryRow {
                metric: "Max Response Time",
                value: format!("{}ms", format_number(summary.max_response_time)),
                status: status::max_response_status(summary.max_response_time),
            },
            Self::total_requests_row(summary),
        ]
    }

    fn success_rate_row(summary: &MetricsSummary) -> SummaryRow {
        SummaryRow {
            metric: "Success Rate",
            value: format_success_percent(summary.success_rate),
            status: status::success_rate_status(summary.success_rate),
        }
    }

    fn avg_response_row(summary: &MetricsSummary) -> SummaryRow {
        SummaryRow {
            metric: "Avg Response Time",
            value: format!("{}ms", format_avg_response(summary)),
            status: status::avg_response_status(summary.avg_response_time),
        }
    }

    fn total_requests_row(summary: &MetricsSummary) -> SummaryRow {
        SummaryRow {
            metric: "Total Requests",
            value: summary.total_requests.to_string(),
            status: Status::Info,
        }
    }

    fn generate_table(rows: &[SummaryRow]) -> String {
        let mut lines = vec![
            "| Metric | Value | Status |".to_string(),
            "|--------|--------|--------|".to_string(),
        ];
        lines.extend(rows.iter().map(|row| {
            format!(
                "| {} | {} | {} |",
                row.metric,
                row.value,
                row.status.emoji()
            )
        }));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAILS_URL: &str = "https://example.com/reports/";

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

    fn data(performance: Option<MetricsSummary>, load: Option<MetricsSummary>) -> ReportData {
        ReportData {
            performance,
            load,
            timestamp: "2025-01-01T12:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_performance_table() {
        let markdown = MarkdownSummary::render(&data(Some(create_test_summary()), None), DETAILS_URL);

        assert!(markdown.contains("### Performance Test Results"));
        assert!(markdown.contains("| Metric | Value | Status |"));
        assert!(markdown.contains("| Success Rate | 90.00% | ⚠️ |"));
        assert!(markdown.contains("| Avg Response Time | 300.00ms | ✅ |"));
        assert!(markdown.contains("| 95th Percentile | 500ms | ✅ |"));
        assert!(markdown.contains("| Total Requests | 10 | ℹ️ |"));
        assert!(markdown.contains("| Failed Requests | 1 | ❌ |"));
        assert!(markdown.contains("No load test data available"));
    }

    #[test]
    fn test_load_table_with_missing_performance() {
        let markdown = MarkdownSummary::render(&data(None, Some(create_test_summary())), DETAILS_URL);

        assert!(markdown.contains("No performance test data available"));
        assert!(markdown.contains("### Load Test Results"));
        assert!(markdown.contains("| Max Response Time | 500ms | ✅ |"));
        assert!(!markdown.contains("Failed Requests"));
        assert!(!markdown.contains("95th Percentile"));
    }

    #[test]
    fn test_both_missing() {
        let markdown = MarkdownSummary::render(&data(None, None), DETAILS_URL);

        assert!(markdown.contains("No performance test data available"));
        assert!(markdown.contains("No load test data available"));
        assert!(!markdown.contains("| Metric |"));
    }

    #[test]
    fn test_details_link() {
        let markdown = MarkdownSummary::render(&data(None, None), DETAILS_URL);
        assert!(markdown.ends_with("🔗 [View detailed reports](https://example.com/reports/)\n"));
    }

    #[test]
    fn test_rows_for_bad_run() {
        let summary = MetricsSummary {
            total_requests: 0,
            failed_requests: 0,
            success_rate: None,
            avg_response_time: 0.0,
            min_response_time: 0.0,
            max_response_time: 0.0,
            p95_response_time: 0.0,
            p99_response_time: 0.0,
            total_time: 0.0,
            response_samples: 0,
        };
        let rows = MarkdownSummary::performance_rows(&summary);

        assert_eq!(rows[0].value, "N/A");
        assert_eq!(rows[0].status, Status::Bad);
        assert_eq!(rows[1].value, "0ms");
        assert_eq!(rows[4].status, Status::Good);
    }

    #[test]
    fn test_timestamp_not_in_summary() {
        let markdown = MarkdownSummary::render(&data(Some(create_test_summary()), None), DETAILS_URL);
        assert!(!markdown.contains("2025-01-01T12:00:00.000Z"));
    }
}
