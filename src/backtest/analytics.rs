//! Backtest analytics and reporting

use super::types::BacktestFrame;
use serde::Serialize;
use statrs::statistics::Statistics;

/// Summary statistics from a completed backtest
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PerformanceSummary {
    /// Final cumulative PnL
    pub total_return: f64,
    /// Annualised mean / std of per-period net PnL
    pub sharpe_ratio: f64,
    /// Deepest fall of cumulative PnL below its running peak (<= 0)
    pub max_drawdown: f64,
    /// Units traded over the run
    pub total_trades: u64,
}

impl PerformanceSummary {
    /// Derive the summary from a frame.
    ///
    /// The Sharpe ratio uses periods that have a price change, i.e. every
    /// record but the first, and is 0 when their dispersion is zero or
    /// undefined.
    pub fn from_frame(frame: &BacktestFrame) -> Self {
        let records = &frame.records;

        let total_return = records.last().map_or(0.0, |r| r.cumulative_pnl);

        let returns: Vec<f64> = records
            .iter()
            .filter(|r| r.price_change.is_some())
            .map(|r| r.net_pnl)
            .collect();
        let sharpe_ratio = sharpe(&returns, frame.params.periods_per_year);

        let max_drawdown = max_drawdown(records.iter().map(|r| r.cumulative_pnl));
        let total_trades = records.iter().map(|r| u64::from(r.trades)).sum();

        Self {
            total_return,
            sharpe_ratio,
            max_drawdown,
            total_trades,
        }
    }

    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        format!(
            r#"
══════════════════════════════════════════════════════
               BACKTEST RESULTS
══════════════════════════════════════════════════════

PERFORMANCE
───────────────────────────────────────────────────────
Total Return ($):   {:+.2}
Sharpe Ratio:       {:.2}
Max Drawdown ($):   {:.2}

ACTIVITY
───────────────────────────────────────────────────────
Total Trades:       {}
══════════════════════════════════════════════════════
"#,
            self.total_return, self.sharpe_ratio, self.max_drawdown, self.total_trades,
        )
    }
}

/// `mean / sample std * sqrt(periods_per_year)`, or 0 when undefined
pub fn sharpe(returns: &[f64], periods_per_year: f64) -> f64 {
    if returns.len() < 2 {
        return 0.0;
    }
    let std = returns.std_dev();
    if !(std > 0.0) {
        return 0.0;
    }
    returns.mean() / std * periods_per_year.sqrt()
}

/// Minimum of `equity - running_max(equity)`; 0 for an empty curve
pub fn max_drawdown(equity: impl IntoIterator<Item = f64>) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0;
    for value in equity {
        peak = peak.max(value);
        worst = f64::min(worst, value - peak);
    }
    worst
}
