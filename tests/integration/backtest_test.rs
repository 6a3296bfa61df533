//! Property tests for the backtest engine

use chrono::{Duration, NaiveDate};
use crush_statarb::backtest::{max_drawdown, run, Position, StrategyParams};
use crush_statarb::series::TimeSeries;
use proptest::prelude::*;

fn series(values: &[f64]) -> TimeSeries {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let dates = (0..values.len())
        .map(|i| start + Duration::days(i as i64))
        .collect();
    TimeSeries::from_parts(dates, values.to_vec()).unwrap()
}

fn spread_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.5f64..2.5, 2..150)
}

fn strategy_params() -> impl Strategy<Value = StrategyParams> {
    (2usize..25, 0.25f64..3.0, 0.0f64..0.1).prop_map(|(lookback, entry_z, cost_per_trade)| {
        StrategyParams {
            lookback,
            entry_z,
            cost_per_trade,
            ..StrategyParams::default()
        }
    })
}

proptest! {
    #[test]
    fn prop_positions_and_trades_in_domain(values in spread_values(), params in strategy_params()) {
        let (frame, summary) = run(&series(&values), &params).unwrap();
        prop_assert_eq!(frame.len(), values.len());

        let mut prev = Position::Flat;
        for record in &frame.records {
            prop_assert!((-1..=1).contains(&record.position.units()));
            prop_assert!(record.trades <= 2);
            prop_assert_eq!(record.trades, prev.trades_to(record.position));
            prop_assert_eq!(record.cost, f64::from(record.trades) * params.cost_per_trade);
            prev = record.position;
        }

        let trades: u64 = frame.records.iter().map(|r| u64::from(r.trades)).sum();
        prop_assert_eq!(summary.total_trades, trades);
    }

    #[test]
    fn prop_pnl_uses_previous_position(values in spread_values(), params in strategy_params()) {
        let (frame, _) = run(&series(&values), &params).unwrap();
        let records = &frame.records;

        prop_assert_eq!(records[0].gross_pnl, 0.0);
        for i in 1..records.len() {
            let change = values[i] - values[i - 1];
            prop_assert_eq!(records[i].price_change, Some(change));
            prop_assert_eq!(records[i].gross_pnl, records[i - 1].position.pnl(change));
        }
    }

    #[test]
    fn prop_cumulative_pnl_is_running_sum(values in spread_values(), params in strategy_params()) {
        let (frame, summary) = run(&series(&values), &params).unwrap();
        let records = &frame.records;

        prop_assert_eq!(records[0].cumulative_pnl, records[0].net_pnl);
        for pair in records.windows(2) {
            prop_assert_eq!(pair[1].cumulative_pnl, pair[0].cumulative_pnl + pair[1].net_pnl);
        }
        prop_assert_eq!(summary.total_return, records[records.len() - 1].cumulative_pnl);
    }

    #[test]
    fn prop_drawdown_non_positive(values in spread_values(), params in strategy_params()) {
        let (frame, summary) = run(&series(&values), &params).unwrap();
        prop_assert!(summary.max_drawdown <= 0.0);

        let equity: Vec<f64> = frame.records.iter().map(|r| r.cumulative_pnl).collect();
        let non_decreasing = equity.windows(2).all(|w| w[1] >= w[0]);
        prop_assert_eq!(summary.max_drawdown == 0.0, non_decreasing);
    }

    #[test]
    fn prop_no_lookahead(
        values in spread_values(),
        params in strategy_params(),
        cut in 0.0f64..1.0,
        shock in -1.0f64..1.0,
    ) {
        let k = 1 + ((values.len() - 1) as f64 * cut) as usize;
        let mut perturbed = values.clone();
        for v in &mut perturbed[k..] {
            *v += shock;
        }

        let (baseline, _) = run(&series(&values), &params).unwrap();
        let (changed, _) = run(&series(&perturbed), &params).unwrap();
        prop_assert_eq!(&baseline.records[..k], &changed.records[..k]);
    }

    #[test]
    fn prop_zero_cost_net_equals_gross(values in spread_values(), mut params in strategy_params()) {
        params.cost_per_trade = 0.0;
        let (frame, _) = run(&series(&values), &params).unwrap();
        for record in &frame.records {
            prop_assert_eq!(record.net_pnl, record.gross_pnl);
            prop_assert_eq!(record.cost, 0.0);
        }
    }

    #[test]
    fn prop_deterministic(values in spread_values(), params in strategy_params()) {
        let a = run(&series(&values), &params).unwrap();
        let b = run(&series(&values), &params).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn test_max_drawdown_matches_equity_curve() {
    let values = [1.0, 1.4, 0.6, 1.8, 0.4, 1.2, 1.9, 0.9, 1.5, 0.7, 1.6, 1.1];
    let params = StrategyParams {
        lookback: 3,
        entry_z: 0.5,
        cost_per_trade: 0.01,
        ..StrategyParams::default()
    };
    let (frame, summary) = run(&series(&values), &params).unwrap();
    let curve = frame.equity_curve().map(|(_, pnl)| pnl);
    assert_eq!(summary.max_drawdown, max_drawdown(curve));
}
