use crate::core::constants::files;
use crate::core::types::MetricsSummary;
use crate::reporting::format::{
    escape_html, format_avg_response, format_number, format_success_percent,
};
use crate::reporting::renderer::ReportData;
use crate::reporting::status::{self, Status};

/// A single value tile on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub value: String,
    pub label: &'static str,
    pub status: Status,
}

impl MetricCard {
    fn new(value: String, label: &'static str, status: Status) -> Self {
        Self {
            value,
            label,
            status,
        }
    }
}

/// HTML dashboard generator for test-run metrics
pub struct HtmlDashboard;

impl HtmlDashboard {
    /// Render the complete standalone HTML document
    pub fn render(data: &ReportData) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>API Performance Dashboard</title>
    <style>{}</style>
</head>
<body>
{}
</body>
</html>
"#,
            Self::generate_css(),
            Self::generate_body_content(data)
        )
    }

    fn generate_css() -> &'static str {
        r#"
        :root {
            --primary-color: #3498db;
            --success-color: #27ae60;
            --warning-color: #f39c12;
            --error-color: #e74c3c;
            --bg-color: #f5f7fa;
            --card-bg: #ffffff;
            --text-primary: #2c3e50;
            --text-secondary: #7f8c8d;
        }

        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            margin: 0;
            padding: 20px;
            background-color: var(--bg-color);
        }

        .container { max-width: 1200px; margin: 0 auto; }

        .header {
            text-align: center;
            color: var(--text-primary);
            margin-bottom: 30px;
        }

        .metrics-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
            gap: 20px;
            margin-bottom: 30px;
        }

        .metric-card {
            background: var(--card-bg);
            padding: 20px;
            border-radius: 10px;
            box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
            border-left: 4px solid var(--primary-color);
        }

        .metric-value {
            font-size: 2em;
            font-weight: bold;
            color: var(--text-primary);
        }

        .metric-label {
            color: var(--text-secondary);
            font-size: 0.9em;
            text-transform: uppercase;
        }

        .success { border-left-color: var(--success-color); }
        .warning { border-left-color: var(--warning-color); }
        .error { border-left-color: var(--error-color); }

        .reports-section {
            background: var(--card-bg);
            padding: 20px;
            border-radius: 10px;
            box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
        }

        .report-link {
            display: inline-block;
            margin: 10px;
            padding: 10px 20px;
            background: var(--primary-color);
            color: white;
            text-decoration: none;
            border-radius: 5px;
        }

        .report-link:hover { background: #2980b9; }

        .timestamp {
            text-align: center;
            color: var(--text-secondary);
            margin-top: 20px;
        }
        "#
    }

    fn generate_body_content(data: &ReportData) -> String {
        let sections = [
            Self::generate_header_section(),
            data.performance
                .as_ref()
                .map(|summary| {
                    Self::generate_metrics_section(
                        "Performance Test Results",
                        &Self::performance_cards(summary),
                    )
                })
                .unwrap_or_default(),
            data.load
                .as_ref()
                .map(|summary| {
                    Self::generate_metrics_section(
                        "Load Test Results",
                        &Self::load_test_cards(summary),
                    )
                })
                .unwrap_or_default(),
            Self::generate_reports_section(),
            Self::generate_timestamp_section(&data.timestamp),
        ];

        format!(
            "    <div class=\"container\">\n{}    </div>",
            sections.concat()
        )
    }

    fn generate_header_section() -> String {
        r#"        <div class="header">
            <h1>🚀 API Performance Dashboard</h1>
            <p>Automated performance testing results</p>
        </div>
"#
        .to_string()
    }

    /// Cards shown for the functional performance run
    pub fn performance_cards(summary: &MetricsSummary) -> Vec<MetricCard> {
        vec![
            Self::success_rate_card(summary),
            Self::avg_response_card(summary),
            MetricCard::new(
                format!("{}ms", format_number(summary.p95_response_time)),
                "95th Percentile",
                status::p95_response_status(summary.p95_response_time),
            ),
            Self::total_requests_card(summary),
        ]
    }

    /// Cards shown for the load-test run
    pub fn load_test_cards(summary: &MetricsSummary) -> Vec<MetricCard> {
        vec![
            Self::success_rate_card(summary),
            Self::avg_response_card(summary),
            MetricCard::new(
                format!("{}ms", format_number(summary.max_response_time)),
                "Max Response Time",
                status::max_response_status(summary.max_response_time),
            ),
            Self::total_requests_card(summary),
        ]
    }

    fn success_rate_card(summary: &MetricsSummary) -> MetricCard {
        MetricCard::new(
            format_success_percent(summary.success_rate),
            "Success Rate",
            status::success_rate_status(summary.success_rate),
        )
    }

    fn avg_response_card(summary: &MetricsSummary) -> MetricCard {
        MetricCard::new(
            format!("{}ms", format_avg_response(summary)),
            "Avg Response Time",
            status::avg_response_status(summary.avg_response_time),
        )
    }

    fn total_requests_card(summary: &MetricsSummary) -> MetricCard {
        MetricCard::new(
            summary.total_requests.to_string(),
            "Total Requests",
            Status::Info,
        )
    }

    fn generate_metrics_section(title: &str, cards: &[MetricCard]) -> String {
        let cards_html = cards
            .iter()
            .map(Self::generate_metric_card)
            .collect::<Vec<_>>()
            .concat();

        format!(
            r#"        <h2>{}</h2>
        <div class="metrics-grid">
{}        </div>
"#,
            escape_html(title),
            cards_html
        )
    }

    fn generate_metric_card(card: &MetricCard) -> String {
        let class = match card.status.css_class() {
            Some(style) => format!("metric-card {style}"),
            None => "metric-card".to_string(),
        };

        format!(
            r#"            <div class="{}">
                <div class="metric-value">{}</div>
                <div class="metric-label">{}</div>
            </div>
"#,
            class,
            escape_html(&card.value),
            escape_html(card.label)
        )
    }

    fn generate_reports_section() -> String {
        format!(
            r#"        <div class="reports-section">
            <h2>📊 Detailed Reports</h2>
            <a href="{}" class="report-link">Performance Test Report</a>
            <a href="{}" class="report-link">Load Test Report</a>
        </div>
"#,
            files::PERFORMANCE_DETAIL_REPORT,
            files::LOAD_TEST_DETAIL_REPORT
        )
    }

    fn generate_timestamp_section(timestamp: &str) -> String {
        format!(
            r#"        <div class="timestamp">
            Last updated: {}
        </div>
"#,
            escape_html(timestamp)
        )
    }
}
