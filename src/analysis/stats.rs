//! Descriptive statistics over response-time samples.

/// Two-decimal fixed-point text of the exact binary value.
///
/// Exact halves round away from zero, so `150.125` becomes `150.13`.
/// `{:.2}` agrees everywhere else but sends exact halves to even.
pub fn to_fixed2(value: f64) -> String {
    // an exact half at the third decimal is an odd multiple of 1/8
    let eighths = value * 8.0;
    if value.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let sign = if value < 0.0 { "-" } else { "" };
        let hundredths = (value.abs() * 100.0).ceil() as u64;
        return format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100);
    }
    format!("{value:.2}")
}

/// Round to two decimal places, the value `to_fixed2` prints
pub fn round2(value: f64) -> f64 {
    to_fixed2(value).parse().unwrap_or(value)
}

/// Arithmetic mean, or `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Smallest and largest value, or `None` for an empty slice
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// Sort samples ascending
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    sorted
}

/// Nearest-rank percentile using the floor-index rule.
///
/// Picks `sorted[floor(n * p)]` with no interpolation, clamping the index to
/// the last element. `sorted` must already be ascending.
pub fn nearest_rank(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let index = (sorted.len() as f64 * p).floor() as usize;
    sorted.get(index.min(sorted.len() - 1)).copied()
}

/// Successful requests as a percentage of all requests, two decimals.
///
/// `None` when there were no requests.
pub fn success_rate(total: u64, failed: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let succeeded = total.saturating_sub(failed);
    Some(round2(succeeded as f64 / total as f64 * 100.0))
}
