//! Augmented Dickey-Fuller unit-root test
//!
//! Regression with a constant:
//! `dy[t] = a + b * y[t-1] + sum(g[i] * dy[t-i], i = 1..=p) + e[t]`
//! H0: b = 0 (unit root). The statistic is the t-value of `b`.

use super::ols::{ols, OlsFit};
use super::types::{AdfResult, CriticalValues};
use crate::error::{Error, Result};
use nalgebra::{DMatrix, DVector};
use statrs::function::erf::erfc;

/// Shortest series the test accepts
pub const MIN_ADF_OBSERVATIONS: usize = 20;

// MacKinnon (1994) response surface, one series, constant only
const TAU_MAX: f64 = 2.74;
const TAU_MIN: f64 = -18.83;
const TAU_STAR: f64 = -1.61;
const TAU_SMALL_P: [f64; 3] = [2.1659, 1.4412, 0.038269];
const TAU_LARGE_P: [f64; 4] = [1.7339, 0.93202, -0.12745, -0.010368];

// MacKinnon (2010) critical value surfaces: b0 + b1/T + b2/T^2 + b3/T^3
const CRIT_1PCT: [f64; 4] = [-3.43035, -6.5393, -16.786, -79.433];
const CRIT_5PCT: [f64; 4] = [-2.86154, -2.8903, -4.234, -40.040];
const CRIT_10PCT: [f64; 4] = [-2.56677, -1.5384, -2.809, 0.0];

/// Lag selection for the ADF regression
#[derive(Debug, Clone, PartialEq)]
pub struct AdfConfig {
    /// Upper bound on lagged differences; `None` uses `ceil(12 * (n/100)^0.25)`
    pub max_lag: Option<usize>,
    /// Pick the lag in `0..=max_lag` with minimum AIC instead of using `max_lag`
    pub autolag: bool,
}

impl Default for AdfConfig {
    fn default() -> Self {
        Self {
            max_lag: None,
            autolag: true,
        }
    }
}

/// Schwert's rule of thumb for the maximum lag
pub fn default_max_lag(n: usize) -> usize {
    (12.0 * (n as f64 / 100.0).powf(0.25)).ceil() as usize
}

/// Run the ADF test on `values`
pub fn adf_test(values: &[f64], config: &AdfConfig) -> Result<AdfResult> {
    let n = values.len();
    if n < MIN_ADF_OBSERVATIONS {
        return Err(Error::InsufficientData {
            what: "ADF test",
            required: MIN_ADF_OBSERVATIONS,
            actual: n,
        });
    }

    // one trend term (the constant) plus the lagged level
    let lag_cap = n / 2 - 2;
    let max_lag = config
        .max_lag
        .unwrap_or_else(|| default_max_lag(n))
        .min(lag_cap);

    let diffs: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();

    let (used_lag, best_aic) = if config.autolag {
        let (lag, aic) = select_lag(values, &diffs, max_lag)?;
        (lag, Some(aic))
    } else {
        (max_lag, None)
    };

    let (x, y) = design(values, &diffs, used_lag);
    let fit = ols(&x, &y)?;
    let statistic = fit.t_value(1);

    tracing::debug!(
        statistic,
        used_lag,
        max_lag,
        nobs = fit.nobs,
        "ADF regression fitted"
    );

    Ok(AdfResult {
        statistic,
        p_value: mackinnon_p_value(statistic),
        used_lag,
        nobs: fit.nobs,
        critical_values: critical_values(fit.nobs),
        best_aic,
    })
}

/// Minimum-AIC lag, with every candidate fitted on the same sample
fn select_lag(values: &[f64], diffs: &[f64], max_lag: usize) -> Result<(usize, f64)> {
    let (x, y) = design(values, diffs, max_lag);

    let mut best: Option<(usize, f64)> = None;
    for lag in 0..=max_lag {
        let candidate = x.columns(0, 2 + lag).into_owned();
        let fit: OlsFit = match ols(&candidate, &y) {
            Ok(fit) => fit,
            Err(e) => {
                tracing::trace!(lag, error = %e, "Skipping ADF lag candidate");
                continue;
            }
        };
        let aic = fit.aic();
        if best.map_or(true, |(_, b)| aic < b) {
            best = Some((lag, aic));
        }
    }

    best.ok_or_else(|| Error::degenerate("no ADF lag order could be fitted"))
}

/// Rows `[1, y[t], dy[t-1], .., dy[t-lags]]` against `dy[t]`, for `t` in `lags..n-1`
fn design(values: &[f64], diffs: &[f64], lags: usize) -> (DMatrix<f64>, DVector<f64>) {
    let rows = diffs.len() - lags;
    let cols = 2 + lags;

    let mut data = Vec::with_capacity(rows * cols);
    let mut target = Vec::with_capacity(rows);
    for t in lags..diffs.len() {
        data.push(1.0);
        data.push(values[t]);
        for i in 1..=lags {
            data.push(diffs[t - i]);
        }
        target.push(diffs[t]);
    }

    (
        DMatrix::from_row_slice(rows, cols, &data),
        DVector::from_vec(target),
    )
}

/// Approximate p-value for the constant-only ADF statistic
pub fn mackinnon_p_value(statistic: f64) -> f64 {
    if statistic > TAU_MAX {
        return 1.0;
    }
    if statistic < TAU_MIN {
        return 0.0;
    }
    let coefs: &[f64] = if statistic <= TAU_STAR {
        &TAU_SMALL_P
    } else {
        &TAU_LARGE_P
    };
    standard_normal_cdf(polyval(coefs, statistic))
}

/// Critical values for a regression on `nobs` observations
pub fn critical_values(nobs: usize) -> CriticalValues {
    let t = nobs as f64;
    let surface = |b: &[f64; 4]| b[0] + b[1] / t + b[2] / t.powi(2) + b[3] / t.powi(3);
    CriticalValues {
        one_pct: surface(&CRIT_1PCT),
        five_pct: surface(&CRIT_5PCT),
        ten_pct: surface(&CRIT_10PCT),
    }
}

/// `c[0] + c[1] x + c[2] x^2 + ...`
fn polyval(coefs: &[f64], x: f64) -> f64 {
    coefs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}
