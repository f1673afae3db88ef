//! Stock accumulator error types.

use thiserror::Error;

use crate::depot::StoreError;
use crate::period::PeriodError;

/// Errors that can occur while computing stock balances.
#[derive(Debug, Error)]
pub enum StockError {
    /// Report range was invalid.
    #[error(transparent)]
    InvalidRange(#[from] PeriodError),

    /// Depot data could not be read; propagated, never retried.
    #[error(transparent)]
    Unavailable(#[from] StoreError),
}

impl StockError {
    /// Returns the error code for log output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRange(_) => "INVALID_RANGE",
            Self::Unavailable(_) => "DATA_UNAVAILABLE",
        }
    }
}
