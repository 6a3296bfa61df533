//! Integration tests for the statistical validator

use chrono::NaiveDate;
use crush_statarb::model::{simulate, OrnsteinUhlenbeck, OuParams, RandomWalk};
use crush_statarb::validation::{
    adf_test, hurst_exponent, validate, AdfConfig, Regime, ValidationConfig,
};
use crush_statarb::Error;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_strong_ou_is_mean_reverting() {
    let model = OrnsteinUhlenbeck::new(OuParams {
        theta: 0.5,
        sigma: 0.01,
        ..OuParams::default()
    })
    .unwrap();
    let series = simulate(&model, date(2020, 1, 1), date(2023, 12, 31), 11).unwrap();

    let result = validate(&series, &ValidationConfig::default()).unwrap();
    assert!(result.is_stationary);
    assert!(result.hurst_exponent < 0.5);
    assert_eq!(result.regime, Regime::MeanReverting);
    assert!(result.test_statistic < result.critical_values.five_pct);
}

#[test]
fn test_random_walk_is_less_stationary_than_ou() {
    let start = date(2016, 1, 1);
    let end = date(2023, 12, 31);
    let walk = simulate(&RandomWalk::new(1.5, 0.05).unwrap(), start, end, 3).unwrap();
    let ou = simulate(
        &OrnsteinUhlenbeck::new(OuParams::default()).unwrap(),
        start,
        end,
        3,
    )
    .unwrap();

    let config = AdfConfig::default();
    let walk_adf = adf_test(walk.values(), &config).unwrap();
    let ou_adf = adf_test(ou.values(), &config).unwrap();
    assert!(ou_adf.statistic < walk_adf.statistic);
    assert!(ou_adf.p_value < walk_adf.p_value);

    let h = hurst_exponent(walk.values()).unwrap();
    assert!((h - 0.5).abs() < 0.15, "random walk Hurst {h}");
}

#[test]
fn test_flat_series_is_degenerate() {
    let values = vec![1.5; 300];
    assert!(matches!(
        hurst_exponent(&values),
        Err(Error::NumericDegeneracy(_))
    ));
    assert!(matches!(
        adf_test(&values, &AdfConfig::default()),
        Err(Error::NumericDegeneracy(_))
    ));
}

#[test]
fn test_validation_json_shape() {
    let model = OrnsteinUhlenbeck::new(OuParams::default()).unwrap();
    let series = simulate(&model, date(2021, 1, 1), date(2024, 1, 1), 42).unwrap();
    let result = validate(&series, &ValidationConfig::default()).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["test_statistic"].is_f64());
    assert!(json["p_value"].is_f64());
    assert!(json["is_stationary"].is_boolean());
    assert!(json["hurst_exponent"].is_f64());
    assert!(json["regime"].is_string());
}
