//! Telemetry module
//!
//! Structured logging for the CLI and the library's `tracing` events

mod logging;

pub use logging::{init_logging, LogFormat};

use crate::config::TelemetryConfig;

/// Guard held for the lifetime of the process once telemetry is up
pub struct TelemetryGuard {
    _priv: (),
}

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    init_logging(&config.log_level, config.log_format)?;
    Ok(TelemetryGuard { _priv: () })
}
