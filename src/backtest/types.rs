//! Strategy parameters and the per-date backtest frame

use super::signal::{Position, Signal};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mean-reversion strategy parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyParams {
    /// Rolling window length
    pub lookback: usize,
    /// Z-score entry threshold
    pub entry_z: f64,
    /// Cost per unit traded, in spread price units
    pub cost_per_trade: f64,
    /// Observations per year for annualising the Sharpe ratio
    pub periods_per_year: f64,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            lookback: 30,
            entry_z: 2.0,
            cost_per_trade: 0.02,
            periods_per_year: 252.0,
        }
    }
}

impl StrategyParams {
    /// Check every precondition of a backtest run
    pub fn validate(&self) -> Result<()> {
        if self.lookback < 2 {
            return Err(Error::invalid(format!(
                "lookback must be >= 2, got {}",
                self.lookback
            )));
        }
        if !(self.entry_z > 0.0 && self.entry_z.is_finite()) {
            return Err(Error::invalid(format!(
                "entry_z must be finite and > 0, got {}",
                self.entry_z
            )));
        }
        if !(self.cost_per_trade >= 0.0 && self.cost_per_trade.is_finite()) {
            return Err(Error::invalid(format!(
                "cost_per_trade must be finite and >= 0, got {}",
                self.cost_per_trade
            )));
        }
        if !(self.periods_per_year > 0.0 && self.periods_per_year.is_finite()) {
            return Err(Error::invalid(format!(
                "periods_per_year must be finite and > 0, got {}",
                self.periods_per_year
            )));
        }
        Ok(())
    }
}

/// State of the strategy on one date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRecord {
    pub date: NaiveDate,
    pub spread: f64,
    pub rolling_mean: Option<f64>,
    pub rolling_std: Option<f64>,
    pub z_score: Option<f64>,
    /// Instruction emitted on this date, if any
    pub signal: Option<Signal>,
    /// Position held at the close of this date
    pub position: Position,
    /// Change from the previous close; absent on the first date
    pub price_change: Option<f64>,
    /// Previous position times `price_change`
    pub gross_pnl: f64,
    /// Units traded to reach `position`
    pub trades: u8,
    pub cost: f64,
    pub net_pnl: f64,
    pub cumulative_pnl: f64,
}

/// Entry bands around the rolling mean
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bands {
    pub lower: f64,
    pub upper: f64,
}

/// Complete result of a backtest run, one record per input date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BacktestFrame {
    pub params: StrategyParams,
    pub records: Vec<FrameRecord>,
}

impl BacktestFrame {
    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the frame has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Held positions in date order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.records.iter().map(|r| r.position)
    }

    /// Cumulative PnL curve in date order
    pub fn equity_curve(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.records.iter().map(|r| (r.date, r.cumulative_pnl))
    }

    /// `mean -/+ entry_z * std` for each record, absent during warm-up
    pub fn bands(&self) -> impl Iterator<Item = Option<Bands>> + '_ {
        let entry_z = self.params.entry_z;
        self.records.iter().map(move |r| {
            let (mean, std) = (r.rolling_mean?, r.rolling_std?);
            Some(Bands {
                lower: mean - entry_z * std,
                upper: mean + entry_z * std,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        let params = StrategyParams::default();
        assert_eq!(params.lookback, 30);
        assert_eq!(params.entry_z, 2.0);
        assert_eq!(params.cost_per_trade, 0.02);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_invalid_params() {
        let cases = [
            StrategyParams {
                lookback: 1,
                ..StrategyParams::default()
            },
            StrategyParams {
                entry_z: 0.0,
                ..StrategyParams::default()
            },
            StrategyParams {
                entry_z: f64::NAN,
                ..StrategyParams::default()
            },
            StrategyParams {
                cost_per_trade: -0.01,
                ..StrategyParams::default()
            },
            StrategyParams {
                periods_per_year: 0.0,
                ..StrategyParams::default()
            },
        ];
        for params in cases {
            assert!(
                matches!(params.validate(), Err(Error::InvalidParameter(_))),
                "{params:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_params_partial_toml() {
        let params: StrategyParams = toml::from_str("lookback = 20").unwrap();
        assert_eq!(params.lookback, 20);
        assert_eq!(params.entry_z, 2.0);
    }
}
