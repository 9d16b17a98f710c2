/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes file names, thresholds, labels and other literal
/// values used across the application, making them easier to maintain.
/// Well-known file locations inside the reports directory
pub mod files {
    /// Default directory holding both the inputs and the generated artifacts
    pub const DEFAULT_REPORTS_DIR: &str = "reports";
    /// Newman results of the functional performance run
    pub const PERFORMANCE_RESULTS: &str = "performance-results.json";
    /// Newman results of the load-test run
    pub const LOAD_TEST_RESULTS: &str = "load-test-results.json";
    /// Standalone HTML dashboard
    pub const DASHBOARD: &str = "index.html";
    /// Markdown summary for embedding in review comments
    pub const SUMMARY: &str = "summary.md";
    /// Detail report produced by the test runner for the performance run
    pub const PERFORMANCE_DETAIL_REPORT: &str = "performance-report.html";
    /// Detail report produced by the test runner for the load-test run
    pub const LOAD_TEST_DETAIL_REPORT: &str = "load-test-report.html";
    /// Name of the optional config file
    pub const CONFIG_FILE: &str = ".perfsummary.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Link target embedded in the summary
pub mod links {
    pub const DEFAULT_DETAILS_URL: &str =
        "https://yourusername.github.io/your-repo/performance-reports/";
}

/// Fixed status thresholds; these must not drift or reports stop matching
pub mod thresholds {
    /// Success rate (percent) at or above which a run is healthy
    pub const SUCCESS_RATE_GOOD: f64 = 95.0;
    /// Success rate (percent) at or above which a run only warns
    pub const SUCCESS_RATE_WARNING: f64 = 80.0;

    pub const AVG_RESPONSE_GOOD_MS: f64 = 1000.0;
    pub const AVG_RESPONSE_WARNING_MS: f64 = 3000.0;

    pub const P95_RESPONSE_GOOD_MS: f64 = 2000.0;
    pub const P95_RESPONSE_WARNING_MS: f64 = 5000.0;

    pub const MAX_RESPONSE_GOOD_MS: f64 = 5000.0;
    pub const MAX_RESPONSE_WARNING_MS: f64 = 10000.0;
}

/// Percentiles used for the nearest-rank estimates
pub mod percentiles {
    pub const P95: f64 = 0.95;
    pub const P99: f64 = 0.99;
}

/// Display and formatting constants
pub mod display {
    /// Emoji for success status
    pub const SUCCESS_EMOJI: &str = "✅";
    /// Emoji for warning status
    pub const WARNING_EMOJI: &str = "⚠️";
    /// Emoji for error status
    pub const ERROR_EMOJI: &str = "❌";
    /// Emoji for informational rows
    pub const INFO_EMOJI: &str = "ℹ️";
    /// Rendered in place of a success rate that has no requests behind it
    pub const NOT_APPLICABLE: &str = "N/A";
    /// Placeholder when the performance results are missing
    pub const NO_PERFORMANCE_DATA: &str = "No performance test data available";
    /// Placeholder when the load-test results are missing
    pub const NO_LOAD_TEST_DATA: &str = "No load test data available";
}

/// Lines printed to stdout while running
pub mod messages {
    pub const GENERATING: &str = "Generating performance summary...";
    pub const GENERATED: &str = "Performance summary generated successfully!";
    /// Prefix for any fatal error written to stderr
    pub const ERROR_PREFIX: &str = "Error generating summary";
}
