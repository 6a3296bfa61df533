//! Backtest command implementation

use super::validate::{diagnose, write_diagnostics, Diagnostics};
use super::{InputArgs, OutputFormat};
use crate::backtest::{run, BacktestFrame, PerformanceSummary};
use crate::config::Config;
use crate::data::save_frame_csv;
use anyhow::Context;
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct BacktestArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Rolling window length
    #[arg(long)]
    pub lookback: Option<usize>,

    /// Z-score entry threshold
    #[arg(long)]
    pub entry_z: Option<f64>,

    /// Cost per unit traded
    #[arg(long)]
    pub cost: Option<f64>,

    /// Skip the stationarity diagnostics
    #[arg(long)]
    pub skip_validation: bool,

    /// Write the per-date frame to this CSV file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Include the full frame in JSON output
    #[arg(long)]
    pub frame: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    validation: Option<&'a Diagnostics>,
    summary: &'a PerformanceSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    frame: Option<&'a BacktestFrame>,
}

impl BacktestArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        self.write_report(config, std::io::stdout().lock())
    }

    /// Run the backtest on the selected series and write the report to `out`
    pub fn write_report<W: Write>(&self, config: &Config, mut out: W) -> anyhow::Result<()> {
        let mut params = config.strategy.clone();
        if let Some(lookback) = self.lookback {
            params.lookback = lookback;
        }
        if let Some(entry_z) = self.entry_z {
            params.entry_z = entry_z;
        }
        if let Some(cost) = self.cost {
            params.cost_per_trade = cost;
        }
        if self.input.monthly {
            params.periods_per_year = 12.0;
        }

        let series = self.input.load(&config.synthetic)?;
        tracing::info!(
            observations = series.len(),
            lookback = params.lookback,
            entry_z = params.entry_z,
            "Starting backtest"
        );

        // Diagnostics are informational; the backtest runs regardless
        let diagnostics = if self.skip_validation {
            None
        } else {
            let diagnostics = diagnose(&series, &config.validation)?;
            if let Diagnostics::Full(result) = &diagnostics {
                if !result.is_stationary {
                    tracing::warn!(p_value = result.p_value, "Spread is not stationary");
                }
            }
            Some(diagnostics)
        };

        let (frame, summary) = run(&series, &params).context("Backtest failed")?;

        if let Some(path) = &self.output {
            save_frame_csv(&frame, path)?;
            tracing::info!(path = %path.display(), "Wrote backtest frame");
        }

        match self.format {
            OutputFormat::Table => {
                if let Some(diagnostics) = &diagnostics {
                    write_diagnostics(&mut out, diagnostics, self.format)?;
                }
                writeln!(out, "{}", summary.format_table())?;
            }
            OutputFormat::Json => {
                let report = JsonReport {
                    validation: diagnostics.as_ref(),
                    summary: &summary,
                    frame: self.frame.then_some(&frame),
                };
                serde_json::to_writer_pretty(&mut out, &report)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn monthly_args(format: OutputFormat) -> BacktestArgs {
        BacktestArgs {
            input: InputArgs {
                monthly: true,
                ..InputArgs::default()
            },
            lookback: Some(6),
            entry_z: Some(1.0),
            cost: None,
            skip_validation: false,
            output: None,
            frame: false,
            format,
        }
    }

    #[test]
    fn test_json_report_with_partial_validation() {
        let mut buf = Vec::new();
        monthly_args(OutputFormat::Json)
            .write_report(&Config::default(), &mut buf)
            .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(json["summary"]["total_trades"].is_u64());
        assert!(json["validation"]["adf"]["p_value"].is_f64());
        assert!(json["validation"]["hurst_exponent"].is_null());
        assert!(json.get("frame").is_none());
    }

    #[test]
    fn test_json_report_with_frame() {
        let args = BacktestArgs {
            skip_validation: true,
            frame: true,
            ..monthly_args(OutputFormat::Json)
        };
        let mut buf = Vec::new();
        args.write_report(&Config::default(), &mut buf).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(json.get("validation").is_none());
        assert_eq!(json["frame"]["records"].as_array().unwrap().len(), 37);
    }

    #[test]
    fn test_invalid_validation_config_fails() {
        let mut config = Config::default();
        config.validation.significance = 0.0;

        let mut buf = Vec::new();
        let err = monthly_args(OutputFormat::Json)
            .write_report(&config, &mut buf)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidParameter(_))
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_invalid_strategy_fails() {
        let args = BacktestArgs {
            lookback: Some(1),
            skip_validation: true,
            ..monthly_args(OutputFormat::Table)
        };
        let mut buf = Vec::new();
        assert!(args.write_report(&Config::default(), &mut buf).is_err());
        assert!(buf.is_empty());
    }
}
