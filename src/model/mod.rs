//! Synthetic spread models
//!
//! Seeded generators for demo runs, tests and benchmarks. Dates follow a
//! Monday-to-Friday business calendar.

mod ou;
mod random_walk;

pub use ou::{OrnsteinUhlenbeck, OuParams};
pub use random_walk::RandomWalk;

use crate::error::{Error, Result};
use crate::series::TimeSeries;
use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A discrete-time process that can produce a path of spread values
pub trait SpreadModel {
    /// Generate `steps` values; the first is the model's starting level
    fn generate<R: Rng + ?Sized>(&self, steps: usize, rng: &mut R) -> Vec<f64>;
}

/// Weekdays from `start` to `end`, both inclusive
pub fn business_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .collect()
}

/// Generate a seeded path of `model` on the business days between two dates
pub fn simulate<M: SpreadModel>(
    model: &M,
    start: NaiveDate,
    end: NaiveDate,
    seed: u64,
) -> Result<TimeSeries> {
    let dates = business_days(start, end);
    if dates.is_empty() {
        return Err(Error::invalid(format!(
            "no business days between {start} and {end}"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let values = model.generate(dates.len(), &mut rng);
    TimeSeries::from_parts(dates, values)
}
