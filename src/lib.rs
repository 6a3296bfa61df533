//! crush-statarb: Mean-reversion research tool for the soybean crush spread
//!
//! This library provides the core components for:
//! - Date-indexed spread series and the board crush combinator
//! - CSV input and output
//! - Statistical validation (ADF stationarity test, Hurst exponent)
//! - Rolling z-score mean-reversion backtesting with trading costs
//! - Performance analytics (total return, Sharpe ratio, max drawdown)
//! - Synthetic spread models for demos and tests
//! - TOML configuration and structured logging

pub mod backtest;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod series;
pub mod telemetry;
pub mod validation;

pub use error::{Error, Result};
