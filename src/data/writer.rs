//! CSV writers for generated series and backtest frames

use crate::backtest::BacktestFrame;
use crate::series::TimeSeries;
use anyhow::Context;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct SpreadRow {
    date: NaiveDate,
    value: f64,
}

/// Write a series as `date,value` rows
pub fn write_spread<W: Write>(series: &TimeSeries, writer: W) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for (date, value) in series.iter() {
        csv.serialize(SpreadRow { date, value })?;
    }
    csv.flush()?;
    Ok(())
}

/// Write one row per frame record; absent values are empty cells
pub fn write_frame<W: Write>(frame: &BacktestFrame, writer: W) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for record in &frame.records {
        csv.serialize(record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Save a series to a CSV file
pub fn save_spread_csv(series: &TimeSeries, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_spread(series, file).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = series.len(), "Saved spread series");
    Ok(())
}

/// Save a backtest frame to a CSV file
pub fn save_frame_csv(frame: &BacktestFrame, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_frame(frame, file).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = frame.len(), "Saved backtest frame");
    Ok(())
}
