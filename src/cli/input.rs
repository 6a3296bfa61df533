//! Spread source shared by the analysis commands

use crate::config::SyntheticConfig;
use crate::data::{load_legs_csv, load_spread_csv};
use crate::model::{simulate, OrnsteinUhlenbeck};
use crate::series::{resample_monthly_mean, TimeSeries};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// CSV with `date,value` columns
    #[arg(long, conflicts_with = "legs")]
    pub input: Option<PathBuf>,

    /// CSV with `date,soybeans,meal,oil` columns; the board crush is computed
    #[arg(long)]
    pub legs: Option<PathBuf>,

    /// Resample to month-end means before analysis
    #[arg(long)]
    pub monthly: bool,
}

impl InputArgs {
    /// Load the requested series, or simulate one from `synthetic`
    pub fn load(&self, synthetic: &SyntheticConfig) -> anyhow::Result<TimeSeries> {
        let series = match (&self.input, &self.legs) {
            (Some(path), _) => load_spread_csv(path)?,
            (None, Some(path)) => load_legs_csv(path)?,
            (None, None) => {
                tracing::info!(
                    seed = synthetic.seed,
                    start = %synthetic.start,
                    end = %synthetic.end,
                    "No input file given, using synthetic OU spread"
                );
                let model = OrnsteinUhlenbeck::new(synthetic.ou_params())?;
                simulate(&model, synthetic.start, synthetic.end, synthetic.seed)?
            }
        };

        if self.monthly {
            let monthly = resample_monthly_mean(&series)?;
            tracing::debug!(daily = series.len(), monthly = monthly.len(), "Resampled to month-end");
            return Ok(monthly);
        }
        Ok(series)
    }
}
