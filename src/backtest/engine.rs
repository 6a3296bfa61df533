//! Backtest engine
//!
//! Single pass over the series. The position applied to a period's price
//! change is the one held at the previous close, so no record depends on
//! later observations.

use super::analytics::PerformanceSummary;
use super::rolling::rolling_stats;
use super::signal::{Position, Signal};
use super::types::{BacktestFrame, FrameRecord, StrategyParams};
use crate::error::{Error, Result};
use crate::series::TimeSeries;

/// Run the mean-reversion strategy over `series`
pub fn run(
    series: &TimeSeries,
    params: &StrategyParams,
) -> Result<(BacktestFrame, PerformanceSummary)> {
    params.validate()?;
    if series.is_empty() {
        return Err(Error::invalid("series is empty"));
    }

    tracing::debug!(
        observations = series.len(),
        lookback = params.lookback,
        entry_z = params.entry_z,
        cost_per_trade = params.cost_per_trade,
        "Running backtest"
    );

    let values = series.values();
    let stats = rolling_stats(values, params.lookback);

    let mut records = Vec::with_capacity(series.len());
    let mut position = Position::Flat;
    let mut prev_z: Option<f64> = None;
    let mut prev_spread: Option<f64> = None;
    let mut cumulative_pnl = 0.0;

    for ((date, spread), window) in series.iter().zip(&stats) {
        let z_score = window.z_score(spread);
        let signal = Signal::detect(z_score, prev_z, params.entry_z);

        let held = position;
        position = held.apply(signal);

        let price_change = prev_spread.map(|prev| spread - prev);
        let gross_pnl = price_change.map_or(0.0, |change| held.pnl(change));
        let trades = held.trades_to(position);
        let cost = f64::from(trades) * params.cost_per_trade;
        let net_pnl = gross_pnl - cost;
        cumulative_pnl += net_pnl;

        records.push(FrameRecord {
            date,
            spread,
            rolling_mean: window.mean,
            rolling_std: window.std,
            z_score,
            signal,
            position,
            price_change,
            gross_pnl,
            trades,
            cost,
            net_pnl,
            cumulative_pnl,
        });

        prev_z = z_score;
        prev_spread = Some(spread);
    }

    let frame = BacktestFrame {
        params: params.clone(),
        records,
    };
    let summary = PerformanceSummary::from_frame(&frame);

    tracing::info!(
        total_return = summary.total_return,
        sharpe = summary.sharpe_ratio,
        max_drawdown = summary.max_drawdown,
        trades = summary.total_trades,
        "Backtest complete"
    );

    Ok((frame, summary))
}
