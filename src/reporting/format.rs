//! Value formatting shared by the dashboard and the summary.

use crate::core::constants::display;
use crate::core::types::MetricsSummary;

/// Whole numbers render without a decimal point, fractions in shortest form
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Success rate with two decimals, or `N/A` when there were no requests
pub fn format_success_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{rate:.2}"),
        None => display::NOT_APPLICABLE.to_string(),
    }
}

/// Success rate as a percentage, e.g. `90.00%`; `N/A` carries no unit
pub fn format_success_percent(rate: Option<f64>) -> String {
    match rate {
        Some(_) => format!("{}%", format_success_rate(rate)),
        None => display::NOT_APPLICABLE.to_string(),
    }
}

/// Average response time with two decimals; a run without samples shows `0`
pub fn format_avg_response(summary: &MetricsSummary) -> String {
    if summary.response_samples == 0 {
        "0".to_string()
    } else {
        format!("{:.2}", summary.avg_response_time)
    }
}

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
