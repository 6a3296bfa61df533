//! Statistical validation module
//!
//! Diagnostics run on the raw spread before backtesting: an ADF
//! stationarity test and a Hurst exponent estimate. Results are
//! informational and never gate the backtest.

mod adf;
mod hurst;
mod ols;
mod types;

pub use adf::{
    adf_test, critical_values, default_max_lag, mackinnon_p_value, AdfConfig,
    MIN_ADF_OBSERVATIONS,
};
pub use hurst::{hurst_exponent, HURST_LAGS};
pub use types::{AdfResult, CriticalValues, Regime, ValidationResult, RANDOM_WALK_HURST};

use crate::error::{Error, Result};
use crate::series::TimeSeries;
use serde::{Deserialize, Serialize};

/// Validator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// p-value below which the spread counts as stationary
    pub significance: f64,
    /// Width above 0.5 still classified as a random walk
    pub random_walk_band: f64,
    /// Maximum ADF lag; defaults to Schwert's rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adf_max_lag: Option<usize>,
    /// Choose the ADF lag by AIC
    pub adf_autolag: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            significance: 0.05,
            random_walk_band: 0.05,
            adf_max_lag: None,
            adf_autolag: true,
        }
    }
}

impl ValidationConfig {
    /// ADF lag settings
    pub fn adf(&self) -> AdfConfig {
        AdfConfig {
            max_lag: self.adf_max_lag,
            autolag: self.adf_autolag,
        }
    }

    fn check(&self) -> Result<()> {
        if !(self.significance > 0.0 && self.significance < 1.0) {
            return Err(Error::invalid(format!(
                "significance must be in (0, 1), got {}",
                self.significance
            )));
        }
        if !(self.random_walk_band >= 0.0 && self.random_walk_band.is_finite()) {
            return Err(Error::invalid(format!(
                "random_walk_band must be finite and >= 0, got {}",
                self.random_walk_band
            )));
        }
        Ok(())
    }
}

/// Run both diagnostics on `series`
pub fn validate(series: &TimeSeries, config: &ValidationConfig) -> Result<ValidationResult> {
    config.check()?;

    let values = series.values();
    let adf = adf_test(values, &config.adf())?;
    let hurst = hurst_exponent(values)?;
    let regime = Regime::classify(hurst, config.random_walk_band);

    let result = ValidationResult {
        test_statistic: adf.statistic,
        p_value: adf.p_value,
        is_stationary: adf.p_value < config.significance,
        hurst_exponent: hurst,
        regime,
        used_lag: adf.used_lag,
        nobs: adf.nobs,
        critical_values: adf.critical_values,
    };

    tracing::info!(
        adf_statistic = result.test_statistic,
        p_value = result.p_value,
        stationary = result.is_stationary,
        hurst = result.hurst_exponent,
        regime = %result.regime,
        "Validation complete"
    );

    Ok(result)
}
