//! CLI interface for crush-statarb
//!
//! Provides subcommands for:
//! - `validate`: ADF and Hurst diagnostics on a spread
//! - `backtest`: Run the z-score strategy on a spread
//! - `simulate`: Write a synthetic spread series to CSV
//! - `config`: Show the effective configuration

mod backtest;
mod input;
mod simulate;
mod validate;

pub use backtest::BacktestArgs;
pub use input::InputArgs;
pub use simulate::SimulateArgs;
pub use validate::ValidateArgs;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "crush-statarb")]
#[command(about = "Mean-reversion validator and backtester for the soybean crush spread")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test a spread for stationarity and mean reversion
    Validate(ValidateArgs),
    /// Run the mean-reversion backtest
    Backtest(BacktestArgs),
    /// Generate a synthetic spread series
    Simulate(SimulateArgs),
    /// Show configuration
    Config,
}

/// Report format for results printed to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
