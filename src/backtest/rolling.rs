//! Trailing window statistics

use statrs::statistics::Statistics;

/// Sample mean and standard deviation of one trailing window
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RollingStats {
    pub mean: Option<f64>,
    pub std: Option<f64>,
}

impl RollingStats {
    /// Z-score of `value`; absent during warm-up or when the window is flat
    pub fn z_score(&self, value: f64) -> Option<f64> {
        let (mean, std) = (self.mean?, self.std?);
        (std > 0.0).then(|| (value - mean) / std)
    }
}

/// Statistics of `values[i + 1 - lookback ..= i]` for every `i`.
///
/// The first `lookback - 1` entries are absent. `lookback` must be >= 2.
pub fn rolling_stats(values: &[f64], lookback: usize) -> Vec<RollingStats> {
    let mut stats = vec![RollingStats::default(); values.len()];
    for (i, window) in values.windows(lookback).enumerate() {
        stats[i + lookback - 1] = window_stats(window);
    }
    stats
}

fn window_stats(window: &[f64]) -> RollingStats {
    // an exactly flat window has zero spread regardless of rounding in the mean
    let flat = window.iter().all(|v| *v == window[0]);
    let std = if flat { 0.0 } else { window.std_dev() };
    RollingStats {
        mean: Some(window.mean()),
        std: Some(std),
    }
}
