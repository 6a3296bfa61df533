//! Validate command implementation

use super::{InputArgs, OutputFormat};
use crate::config::Config;
use crate::error::Error;
use crate::series::TimeSeries;
use crate::validation::{
    adf_test, hurst_exponent, validate, AdfResult, Regime, ValidationConfig, ValidationResult,
};
use clap::Args;
use serde::Serialize;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// p-value threshold for stationarity
    #[arg(long)]
    pub significance: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ValidateArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        self.write_report(config, std::io::stdout().lock())
    }

    /// Validate the selected series and write the report to `out`
    pub fn write_report<W: Write>(&self, config: &Config, mut out: W) -> anyhow::Result<()> {
        let mut validation = config.validation.clone();
        if let Some(significance) = self.significance {
            validation.significance = significance;
        }

        let series = self.input.load(&config.synthetic)?;
        tracing::info!(observations = series.len(), "Validating spread");

        let diagnostics = diagnose(&series, &validation)?;
        write_diagnostics(&mut out, &diagnostics, self.format)
    }
}

/// Validator output: the full result, or whichever parts could be computed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub(super) enum Diagnostics {
    Full(ValidationResult),
    Partial(PartialDiagnostics),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(super) struct PartialDiagnostics {
    pub adf: Option<AdfResult>,
    pub is_stationary: Option<bool>,
    pub hurst_exponent: Option<f64>,
    pub regime: Option<Regime>,
}

/// Run the validator. A series the statistics cannot handle degrades to
/// partial diagnostics; bad settings are returned as errors.
pub(super) fn diagnose(
    series: &TimeSeries,
    validation: &ValidationConfig,
) -> anyhow::Result<Diagnostics> {
    match validate(series, validation) {
        Ok(result) => Ok(Diagnostics::Full(result)),
        Err(e @ (Error::InsufficientData { .. } | Error::NumericDegeneracy(_))) => {
            tracing::warn!(error = %e, "Full validation unavailable");
            Ok(Diagnostics::Partial(partial(series, validation)))
        }
        Err(e) => Err(e.into()),
    }
}

fn partial(series: &TimeSeries, validation: &ValidationConfig) -> PartialDiagnostics {
    let values = series.values();
    let mut diagnostics = PartialDiagnostics::default();

    match adf_test(values, &validation.adf()) {
        Ok(adf) => {
            diagnostics.is_stationary = Some(adf.p_value < validation.significance);
            diagnostics.adf = Some(adf);
        }
        Err(e) => tracing::warn!(error = %e, "ADF test skipped"),
    }

    match hurst_exponent(values) {
        Ok(h) => {
            diagnostics.hurst_exponent = Some(h);
            diagnostics.regime = Some(Regime::classify(h, validation.random_walk_band));
        }
        Err(e) => tracing::warn!(error = %e, "Hurst exponent skipped"),
    }

    diagnostics
}

pub(super) fn write_diagnostics<W: Write>(
    out: &mut W,
    diagnostics: &Diagnostics,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, diagnostics)?;
            writeln!(out)?;
        }
        OutputFormat::Table => match diagnostics {
            Diagnostics::Full(result) => writeln!(out, "{}", result.format_table())?,
            Diagnostics::Partial(partial) => write_partial_table(out, partial)?,
        },
    }
    Ok(())
}

fn write_partial_table<W: Write>(out: &mut W, partial: &PartialDiagnostics) -> anyhow::Result<()> {
    if let Some(adf) = &partial.adf {
        writeln!(
            out,
            "ADF statistic {:.4}, p-value {:.6} ({} lags, {} obs)",
            adf.statistic, adf.p_value, adf.used_lag, adf.nobs
        )?;
    }
    if let (Some(h), Some(regime)) = (partial.hurst_exponent, partial.regime) {
        writeln!(out, "Hurst exponent {:.4}: {}", h, regime)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monthly_args(format: OutputFormat) -> ValidateArgs {
        // 37 month-end points: enough for ADF, too few for the Hurst regression
        ValidateArgs {
            input: InputArgs {
                monthly: true,
                ..InputArgs::default()
            },
            significance: None,
            format,
        }
    }

    #[test]
    fn test_partial_report_is_valid_json() {
        let mut buf = Vec::new();
        monthly_args(OutputFormat::Json)
            .write_report(&Config::default(), &mut buf)
            .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(json["adf"]["statistic"].is_f64());
        assert!(json["is_stationary"].is_boolean());
        assert!(json["hurst_exponent"].is_null());
        assert!(json["regime"].is_null());
    }

    #[test]
    fn test_partial_report_table() {
        let mut buf = Vec::new();
        monthly_args(OutputFormat::Table)
            .write_report(&Config::default(), &mut buf)
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("ADF statistic"));
        assert!(!text.contains("Hurst"));
    }

    #[test]
    fn test_full_report_is_valid_json() {
        let args = ValidateArgs {
            input: InputArgs::default(),
            significance: None,
            format: OutputFormat::Json,
        };
        let mut buf = Vec::new();
        args.write_report(&Config::default(), &mut buf).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(json["test_statistic"].is_f64());
        assert!(json["hurst_exponent"].is_f64());
    }

    #[test]
    fn test_invalid_significance_fails() {
        let args = ValidateArgs {
            significance: Some(1.5),
            ..monthly_args(OutputFormat::Table)
        };
        let mut buf = Vec::new();
        let err = args.write_report(&Config::default(), &mut buf).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidParameter(_))
        ));
        assert!(buf.is_empty());
    }
}
