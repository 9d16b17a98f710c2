//! Property-based tests for perfsummary using proptest
//!
//! These tests generate random result documents to check that the derived
//! metrics and rendered reports hold their invariants for any input.

use perfsummary::analysis::ResultAnalyzer;
use perfsummary::analysis::stats;
use perfsummary::core::types::{RequestStats, Run, RunStats, RunTimings};
use perfsummary::reporting::{ReportData, ReportRenderer};
use perfsummary::{ExecutionRecord, RunResultsDocument};
use proptest::prelude::*;

/// Response times as captured by a test runner, some executions without one
fn response_times_strategy() -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(
        prop_oneof![
            4 => (0u32..60_000).prop_map(|ms| Some(f64::from(ms))),
            1 => (0u32..60_000_000).prop_map(|us| Some(f64::from(us) / 1000.0)),
            1 => Just(None),
        ],
        0..300,
    )
}

/// Request counters with failed <= total
fn request_stats_strategy() -> impl Strategy<Value = (u64, u64)> {
    (0u64..100_000).prop_flat_map(|total| (Just(total), 0..=total))
}

fn document(total: u64, failed: u64, times: &[Option<f64>]) -> RunResultsDocument {
    RunResultsDocument {
        run: Run {
            stats: RunStats {
                requests: RequestStats { total, failed },
            },
            executions: times
                .iter()
                .map(|t| ExecutionRecord::with_response_time(*t))
                .collect(),
            timings: RunTimings {
                started: 0.0,
                completed: 1000.0,
            },
        },
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_percentiles_are_observed_values(times in response_times_strategy()) {
        let present: Vec<f64> = times.iter().flatten().copied().collect();
        let summary = ResultAnalyzer::summarize(&document(1, 0, &times));

        prop_assert_eq!(summary.response_samples, present.len());
        if present.is_empty() {
            prop_assert_eq!(summary.p95_response_time, 0.0);
            prop_assert_eq!(summary.p99_response_time, 0.0);
        } else {
            prop_assert!(present.contains(&summary.p95_response_time));
            prop_assert!(present.contains(&summary.p99_response_time));
        }
    }

    #[test]
    fn test_order_statistics_are_consistent(times in response_times_strategy()) {
        let summary = ResultAnalyzer::summarize(&document(1, 0, &times));

        prop_assert!(summary.min_response_time <= summary.p95_response_time);
        prop_assert!(summary.p95_response_time <= summary.p99_response_time);
        prop_assert!(summary.p99_response_time <= summary.max_response_time);
        // average is rounded to two decimals
        prop_assert!(summary.avg_response_time >= summary.min_response_time - 0.01);
        prop_assert!(summary.avg_response_time <= summary.max_response_time + 0.01);
    }

    #[test]
    fn test_nearest_rank_matches_floor_index(times in response_times_strategy()) {
        let present: Vec<f64> = times.iter().flatten().copied().collect();
        prop_assume!(!present.is_empty());

        let sorted = stats::sorted(&present);
        let n = sorted.len();
        let index = ((n as f64 * 0.95).floor() as usize).min(n - 1);
        prop_assert_eq!(stats::nearest_rank(&sorted, 0.95), Some(sorted[index]));
    }

    #[test]
    fn test_success_rate_in_range((total, failed) in request_stats_strategy()) {
        let summary = ResultAnalyzer::summarize(&document(total, failed, &[]));

        match summary.success_rate {
            Some(rate) => {
                prop_assert!(total > 0);
                prop_assert!((0.0..=100.0).contains(&rate));
            }
            None => prop_assert_eq!(total, 0),
        }
    }

    #[test]
    fn test_summarize_is_deterministic(
        times in response_times_strategy(),
        (total, failed) in request_stats_strategy(),
    ) {
        let doc = document(total, failed, &times);
        prop_assert_eq!(ResultAnalyzer::summarize(&doc), ResultAnalyzer::summarize(&doc));
    }

    #[test]
    fn test_rendering_always_has_both_headings(
        times in response_times_strategy(),
        (total, failed) in request_stats_strategy(),
        with_performance in any::<bool>(),
        with_load in any::<bool>(),
    ) {
        let summary = ResultAnalyzer::summarize(&document(total, failed, &times));
        let data = ReportData {
            performance: with_performance.then(|| summary.clone()),
            load: with_load.then(|| summary.clone()),
            timestamp: "2025-01-01T12:00:00.000Z".to_string(),
        };

        let reports = ReportRenderer::render(&data, "https://example.com/");

        prop_assert!(reports.summary.contains("### Performance Test Results"));
        prop_assert!(reports.summary.contains("### Load Test Results"));
        prop_assert_eq!(
            reports.summary.contains("No performance test data available"),
            !with_performance
        );
        prop_assert_eq!(
            reports.dashboard.contains("<h2>Load Test Results</h2>"),
            with_load
        );
        prop_assert_eq!(reports.clone(), ReportRenderer::render(&data, "https://example.com/"));
    }
}
