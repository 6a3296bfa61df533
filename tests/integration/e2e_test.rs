//! End-to-end integration tests

use crush_statarb::backtest::{run, Position};
use crush_statarb::config::Config;
use crush_statarb::data::{load_legs_csv, load_spread_csv, save_frame_csv, save_spread_csv};
use crush_statarb::model::{simulate, OrnsteinUhlenbeck};
use crush_statarb::series::resample_monthly_mean;
use crush_statarb::validation::validate;
use std::io::Write;

#[test]
fn test_config_example_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example");
    let config = Config::load(path).unwrap();
    assert_eq!(config.strategy.lookback, 30);
    assert_eq!(config.strategy.entry_z, 2.0);
    assert_eq!(config.strategy.cost_per_trade, 0.02);
    assert_eq!(config.synthetic.seed, 42);
}

#[test]
fn test_synthetic_pipeline() {
    let config = Config::default();
    let synthetic = &config.synthetic;
    let model = OrnsteinUhlenbeck::new(synthetic.ou_params()).unwrap();
    let series = simulate(&model, synthetic.start, synthetic.end, synthetic.seed).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let spread_path = dir.path().join("spread.csv");
    save_spread_csv(&series, &spread_path).unwrap();
    let loaded = load_spread_csv(&spread_path).unwrap();
    assert_eq!(loaded, series);

    let validation = validate(&loaded, &config.validation).unwrap();
    assert!(validation.p_value.is_finite());

    let (frame, summary) = run(&loaded, &config.strategy).unwrap();
    assert_eq!(frame.len(), series.len());
    assert!(summary.max_drawdown <= 0.0);
    assert!(frame.records[..config.strategy.lookback - 1]
        .iter()
        .all(|r| r.position == Position::Flat && r.z_score.is_none()));

    let frame_path = dir.path().join("frame.csv");
    save_frame_csv(&frame, &frame_path).unwrap();
    let text = std::fs::read_to_string(&frame_path).unwrap();
    assert_eq!(text.lines().count(), frame.len() + 1);
}

#[test]
fn test_crush_legs_pipeline() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "date,soybeans,meal,oil").unwrap();
    // 40 trading days across two months with a wobbling margin
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for i in 0..40 {
        let d = start + chrono::Duration::days(i);
        let wobble = ((i % 7) as f64 - 3.0) * 4.0;
        writeln!(file, "{d},{},{},{}", 1200.0 + wobble, 350.0, 55.0).unwrap();
    }

    let spread = load_legs_csv(file.path()).unwrap();
    assert_eq!(spread.len(), 40);
    // 350 * 0.022 + 55 * 0.11 - 12.00 = 1.75 at zero wobble
    assert!((spread.values()[3] - 1.75).abs() < 1e-9);

    let monthly = resample_monthly_mean(&spread).unwrap();
    assert_eq!(monthly.len(), 2);

    let (frame, summary) = run(&spread, &config_params()).unwrap();
    assert_eq!(frame.len(), 40);
    assert!(summary.total_trades > 0);
}

fn config_params() -> crush_statarb::backtest::StrategyParams {
    crush_statarb::backtest::StrategyParams {
        lookback: 5,
        entry_z: 1.0,
        ..Default::default()
    }
}
