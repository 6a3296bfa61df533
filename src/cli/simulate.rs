//! Simulate command implementation

use crate::config::Config;
use crate::data::{save_spread_csv, write_spread};
use crate::model::{simulate, OrnsteinUhlenbeck, RandomWalk};
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// First date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Generate a driftless random walk instead of an OU process
    #[arg(long)]
    pub random_walk: bool,

    /// Output CSV file; stdout if omitted
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl SimulateArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let synthetic = &config.synthetic;
        let seed = self.seed.unwrap_or(synthetic.seed);
        let start = self.start.unwrap_or(synthetic.start);
        let end = self.end.unwrap_or(synthetic.end);

        let series = if self.random_walk {
            let model = RandomWalk::new(synthetic.initial, synthetic.sigma)?;
            simulate(&model, start, end, seed)?
        } else {
            let model = OrnsteinUhlenbeck::new(synthetic.ou_params())?;
            simulate(&model, start, end, seed)?
        };
        tracing::info!(observations = series.len(), seed, "Simulated spread");

        match &self.output {
            Some(path) => save_spread_csv(&series, path)?,
            None => write_spread(&series, std::io::stdout().lock())?,
        }
        Ok(())
    }
}
