//! Time series module
//!
//! The date-indexed spread series consumed by the validator and the engine,
//! plus the crush spread combinator that builds one from its three legs.

mod crush;

pub use crush::{board_crush, resample_monthly_mean, CrushLegs};

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// Ordered `(date, value)` observations with strictly increasing dates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Build a series from points that are already in date order.
    ///
    /// Fails if a date repeats or goes backwards, or if a value is not finite.
    pub fn new(points: Vec<(NaiveDate, f64)>) -> Result<Self> {
        let (dates, values) = points.into_iter().unzip();
        Self::from_parts(dates, values)
    }

    /// Build a series from points in any order; duplicates still fail.
    pub fn from_unsorted(mut points: Vec<(NaiveDate, f64)>) -> Result<Self> {
        points.sort_by_key(|(date, _)| *date);
        Self::new(points)
    }

    /// Build a series from parallel date and value columns
    pub fn from_parts(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(Error::invalid(format!(
                "{} dates but {} values",
                dates.len(),
                values.len()
            )));
        }

        if let Some(w) = dates.windows(2).find(|w| w[1] <= w[0]) {
            return Err(Error::invalid(format!(
                "dates must be strictly increasing: {} followed by {}",
                w[0], w[1]
            )));
        }

        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(Error::invalid(format!(
                "non-finite value {} on {}",
                v, dates[i]
            )));
        }

        Ok(Self { dates, values })
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Observation dates
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Observation values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate `(date, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }

    /// First and last date, if any
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((*self.dates.first()?, *self.dates.last()?))
    }
}
