//! Backtesting module
//!
//! Rolling z-score mean-reversion strategy with hold-until-next-signal
//! positions, per-period PnL net of trading costs and summary statistics.

mod analytics;
mod engine;
mod rolling;
mod signal;
mod types;

pub use analytics::{max_drawdown, sharpe, PerformanceSummary};
pub use engine::run;
pub use rolling::{rolling_stats, RollingStats};
pub use signal::{Position, Signal};
pub use types::{BacktestFrame, Bands, FrameRecord, StrategyParams};
