//! Board crush spread
//!
//! Gross processing margin of one bushel of soybeans:
//! `meal * 0.022 + oil * 0.11 - soybeans / 100`
//! with meal in $/short ton, oil in cents/lb and soybeans in cents/bu.

use super::TimeSeries;
use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Short tons of meal per bushel of soybeans (44 lb / 2000 lb)
const MEAL_TONS_PER_BUSHEL: f64 = 0.022;
/// Oil yield per bushel, in hundreds of pounds (11 lb), against a cents/lb quote
const OIL_YIELD_FACTOR: f64 = 0.11;
/// Soybeans are quoted in cents per bushel
const CENTS_PER_DOLLAR: f64 = 100.0;

/// Prices of the three crush legs on a single date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrushLegs {
    pub soybeans: f64,
    pub meal: f64,
    pub oil: f64,
}

impl CrushLegs {
    /// Board crush value in dollars per bushel
    pub fn spread(&self) -> f64 {
        self.meal * MEAL_TONS_PER_BUSHEL + self.oil * OIL_YIELD_FACTOR
            - self.soybeans / CENTS_PER_DOLLAR
    }
}

/// Combine the three legs into a spread series on the dates they share.
///
/// Dates missing from any leg are dropped; no leg is forward-filled.
pub fn board_crush(
    soybeans: &TimeSeries,
    meal: &TimeSeries,
    oil: &TimeSeries,
) -> Result<TimeSeries> {
    let meal: BTreeMap<NaiveDate, f64> = meal.iter().collect();
    let oil: BTreeMap<NaiveDate, f64> = oil.iter().collect();

    let points: Vec<(NaiveDate, f64)> = soybeans
        .iter()
        .filter_map(|(date, soy)| {
            let legs = CrushLegs {
                soybeans: soy,
                meal: *meal.get(&date)?,
                oil: *oil.get(&date)?,
            };
            Some((date, legs.spread()))
        })
        .collect();

    if points.is_empty() {
        return Err(Error::invalid("crush legs share no common dates"));
    }

    TimeSeries::new(points)
}

/// Mean of each calendar month, stamped with the month's last day
pub fn resample_monthly_mean(series: &TimeSeries) -> Result<TimeSeries> {
    let mut buckets: BTreeMap<(i32, u32), (f64, usize)> = BTreeMap::new();
    for (date, value) in series.iter() {
        let bucket = buckets.entry((date.year(), date.month())).or_insert((0.0, 0));
        bucket.0 += value;
        bucket.1 += 1;
    }

    let mut points = Vec::with_capacity(buckets.len());
    for ((year, month), (sum, count)) in buckets {
        points.push((month_end(year, month)?, sum / count as f64));
    }

    TimeSeries::new(points)
}

fn month_end(year: i32, month: u32) -> Result<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| Error::invalid(format!("no month end for {year}-{month:02}")))
}
