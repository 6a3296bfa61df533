//! Error types shared by the validator and the backtest engine

use thiserror::Error;

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised before (or instead of) producing a result
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A strategy parameter or the input series is malformed
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// The series is too short for the requested statistic
    #[error("Insufficient data: {what} needs at least {required} observations, got {actual}")]
    InsufficientData {
        what: &'static str,
        required: usize,
        actual: usize,
    },
    /// The statistic is undefined for this input (zero variance, singular design)
    #[error("Numeric degeneracy: {0}")]
    NumericDegeneracy(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        Self::NumericDegeneracy(msg.into())
    }
}
