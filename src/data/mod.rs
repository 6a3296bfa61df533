//! Data input and output module
//!
//! Reads spread (or crush leg) observations from CSV files and writes
//! generated series and backtest frames back out

mod reader;
mod writer;

pub use reader::{load_legs_csv, load_spread_csv, read_legs, read_spread};
pub use writer::{save_frame_csv, save_spread_csv, write_frame, write_spread};
