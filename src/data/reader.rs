//! CSV readers for spread and crush leg files
//!
//! Expected layouts (header row required, ISO dates):
//! - spread: `date,value` (`spread` is accepted for the value column)
//! - legs:   `date,soybeans,meal,oil`

use crate::series::{board_crush, TimeSeries};
use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SpreadRecord {
    date: NaiveDate,
    #[serde(alias = "spread")]
    value: f64,
}

/// A blank cell leaves that leg without a quote for the date
#[derive(Debug, Deserialize)]
struct LegsRecord {
    date: NaiveDate,
    soybeans: Option<f64>,
    meal: Option<f64>,
    oil: Option<f64>,
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// Parse a `date,value` CSV into a series (rows may be in any date order)
pub fn read_spread<R: Read>(reader: R) -> anyhow::Result<TimeSeries> {
    let mut points = Vec::new();
    for (row, result) in csv_reader(reader).deserialize().enumerate() {
        let record: SpreadRecord = result.with_context(|| format!("bad spread row {}", row + 1))?;
        points.push((record.date, record.value));
    }
    Ok(TimeSeries::from_unsorted(points)?)
}

/// Parse a `date,soybeans,meal,oil` CSV and compute the board crush spread.
///
/// Dates missing any leg are dropped by the join.
pub fn read_legs<R: Read>(reader: R) -> anyhow::Result<TimeSeries> {
    let mut soybeans = Vec::new();
    let mut meal = Vec::new();
    let mut oil = Vec::new();

    for (row, result) in csv_reader(reader).deserialize().enumerate() {
        let record: LegsRecord = result.with_context(|| format!("bad legs row {}", row + 1))?;
        let date = record.date;
        soybeans.extend(record.soybeans.map(|v| (date, v)));
        meal.extend(record.meal.map(|v| (date, v)));
        oil.extend(record.oil.map(|v| (date, v)));
    }

    let spread = board_crush(
        &TimeSeries::from_unsorted(soybeans)?,
        &TimeSeries::from_unsorted(meal)?,
        &TimeSeries::from_unsorted(oil)?,
    )?;
    Ok(spread)
}

/// Load a spread CSV from disk
pub fn load_spread_csv(path: impl AsRef<Path>) -> anyhow::Result<TimeSeries> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let series = read_spread(file).with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = series.len(), "Loaded spread series");
    Ok(series)
}

/// Load a crush legs CSV from disk and compute the spread
pub fn load_legs_csv(path: impl AsRef<Path>) -> anyhow::Result<TimeSeries> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let series = read_legs(file).with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = series.len(), "Loaded crush legs");
    Ok(series)
}
