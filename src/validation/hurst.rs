//! Hurst exponent from the scaling of lagged differences
//!
//! For each lag L, `tau(L) = sqrt(std(x[t+L] - x[t]))`. Since
//! `std ~ L^H`, `ln tau` is linear in `ln L` with slope `H / 2`.

use crate::error::{Error, Result};
use statrs::statistics::Statistics;
use std::ops::Range;

/// Lags used in the log-log regression
pub const HURST_LAGS: Range<usize> = 2..100;

/// Estimate the Hurst exponent of `values`.
///
/// Needs more than `HURST_LAGS.end` observations so every lag has a
/// defined difference series. A lag whose differences have zero dispersion
/// is a degeneracy, not a zero.
pub fn hurst_exponent(values: &[f64]) -> Result<f64> {
    let n = values.len();
    if n <= HURST_LAGS.end {
        return Err(Error::InsufficientData {
            what: "Hurst exponent",
            required: HURST_LAGS.end + 1,
            actual: n,
        });
    }

    let mut log_lags = Vec::with_capacity(HURST_LAGS.len());
    let mut log_tau = Vec::with_capacity(HURST_LAGS.len());

    for lag in HURST_LAGS {
        let tau = lagged_dispersion(values, lag);
        if !(tau > 0.0) {
            return Err(Error::degenerate(format!(
                "lag-{lag} differences have zero dispersion"
            )));
        }
        log_lags.push((lag as f64).ln());
        log_tau.push(tau.ln());
    }

    let hurst = 2.0 * slope(&log_lags, &log_tau);
    tracing::debug!(hurst, n, "Hurst exponent estimated");
    Ok(hurst)
}

/// `sqrt` of the population std of `x[t+lag] - x[t]`
fn lagged_dispersion(values: &[f64], lag: usize) -> f64 {
    values[lag..]
        .iter()
        .zip(values)
        .map(|(later, earlier)| later - earlier)
        .population_std_dev()
        .sqrt()
}

/// OLS slope of `y` on `x`
fn slope(x: &[f64], y: &[f64]) -> f64 {
    let x_mean = x.mean();
    let y_mean = y.mean();
    let (num, den) = x
        .iter()
        .zip(y)
        .fold((0.0, 0.0), |(num, den), (xi, yi)| {
            let dx = xi - x_mean;
            (num + dx * (yi - y_mean), den + dx * dx)
        });
    num / den
}
