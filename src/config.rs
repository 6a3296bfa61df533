//! Configuration types for crush-statarb

use crate::backtest::StrategyParams;
use crate::model::OuParams;
use crate::telemetry::LogFormat;
use crate::validation::ValidationConfig;
use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub strategy: StrategyParams,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub synthetic: SyntheticConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Synthetic OU series used when no input file is given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    pub mu: f64,
    pub theta: f64,
    pub sigma: f64,
    pub initial: f64,
    pub seed: u64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        let ou = OuParams::default();
        Self {
            mu: ou.mu,
            theta: ou.theta,
            sigma: ou.sigma,
            initial: ou.initial,
            seed: 42,
            start: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        }
    }
}

impl SyntheticConfig {
    /// Process parameters of the configured OU model
    pub fn ou_params(&self) -> OuParams {
        OuParams {
            mu: self.mu,
            theta: self.theta,
            sigma: self.sigma,
            initial: self.initial,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
