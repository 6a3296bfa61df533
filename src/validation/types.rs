//! Validation result types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hurst exponent of an ideal random walk
pub const RANDOM_WALK_HURST: f64 = 0.5;

/// Behaviour implied by the Hurst exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// H < 0.5
    MeanReverting,
    /// 0.5 <= H <= 0.5 + band
    RandomWalk,
    /// H > 0.5 + band
    Trending,
}

impl Regime {
    /// Classify a Hurst exponent. Exactly 0.5 counts as a random walk.
    pub fn classify(hurst: f64, random_walk_band: f64) -> Self {
        if hurst < RANDOM_WALK_HURST {
            Self::MeanReverting
        } else if hurst <= RANDOM_WALK_HURST + random_walk_band {
            Self::RandomWalk
        } else {
            Self::Trending
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MeanReverting => "MEAN REVERTING",
            Self::RandomWalk => "RANDOM WALK",
            Self::Trending => "TRENDING",
        };
        f.write_str(label)
    }
}

/// ADF critical values at the usual significance levels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalValues {
    pub one_pct: f64,
    pub five_pct: f64,
    pub ten_pct: f64,
}

/// Outcome of an augmented Dickey-Fuller test with a constant term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdfResult {
    /// t-statistic of the lagged level coefficient
    pub statistic: f64,
    /// MacKinnon approximate p-value
    pub p_value: f64,
    /// Number of lagged differences in the final regression
    pub used_lag: usize,
    /// Observations in the final regression
    pub nobs: usize,
    /// Critical values for `nobs`
    pub critical_values: CriticalValues,
    /// AIC of the selected lag, when chosen automatically
    pub best_aic: Option<f64>,
}

/// Stationarity and mean-reversion diagnostics for a spread series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// ADF t-statistic
    pub test_statistic: f64,
    /// ADF p-value
    pub p_value: f64,
    /// `p_value` below the configured significance level
    pub is_stationary: bool,
    /// Hurst exponent estimate
    pub hurst_exponent: f64,
    /// Regime implied by `hurst_exponent`
    pub regime: Regime,
    /// Lagged differences used by the ADF regression
    pub used_lag: usize,
    /// Observations in the ADF regression
    pub nobs: usize,
    /// ADF critical values
    pub critical_values: CriticalValues,
}

impl ValidationResult {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        let stationarity = if self.is_stationary {
            "STATIONARY"
        } else {
            "NON-STATIONARY"
        };
        format!(
            r#"
══════════════════════════════════════════════════════
               STATISTICAL VALIDATION
══════════════════════════════════════════════════════

STATIONARITY (ADF)
───────────────────────────────────────────────────────
ADF Statistic:    {:.4}
P-Value:          {:.6}
Lags / Obs:       {} / {}
Critical 1/5/10%: {:.3} / {:.3} / {:.3}
Result:           {}

MEAN REVERSION
───────────────────────────────────────────────────────
Hurst Exponent:   {:.4}
Regime:           {}
══════════════════════════════════════════════════════
"#,
            self.test_statistic,
            self.p_value,
            self.used_lag,
            self.nobs,
            self.critical_values.one_pct,
            self.critical_values.five_pct,
            self.critical_values.ten_pct,
            stationarity,
            self.hurst_exponent,
            self.regime,
        )
    }
}
