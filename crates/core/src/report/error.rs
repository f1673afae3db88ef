//! Report error types.

use chrono::NaiveDate;
use thiserror::Error;

use crate::depot::StoreError;
use crate::layout::LayoutError;
use crate::period::PeriodError;
use crate::stock::StockError;

/// Errors that can occur during report generation.
///
/// A failure aborts the entire report before any page grid is returned;
/// partial financial reports are never emitted.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Invalid date range, rejected before any computation.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// Collaborator read failure; propagated, never retried or zeroed.
    #[error("Depot data unavailable: {0}")]
    DataUnavailable(String),

    /// A content block referenced columns outside its half. Programming
    /// error: queues are built internally, so this fails fast in tests.
    #[error("Malformed content block: {0}")]
    MalformedBlock(String),
}

impl ReportError {
    /// Returns the error code for log output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDateRange { .. } => "INVALID_RANGE",
            Self::DataUnavailable(_) => "DATA_UNAVAILABLE",
            Self::MalformedBlock(_) => "MALFORMED_BLOCK",
        }
    }
}

impl From<PeriodError> for ReportError {
    fn from(err: PeriodError) -> Self {
        let PeriodError::InvalidRange { start, end } = err;
        Self::InvalidDateRange { start, end }
    }
}

impl From<StoreError> for ReportError {
    fn from(err: StoreError) -> Self {
        Self::DataUnavailable(err.to_string())
    }
}

impl From<StockError> for ReportError {
    fn from(err: StockError) -> Self {
        match err {
            StockError::InvalidRange(period) => period.into(),
            StockError::Unavailable(store) => store.into(),
        }
    }
}

impl From<LayoutError> for ReportError {
    fn from(err: LayoutError) -> Self {
        Self::MalformedBlock(err.to_string())
    }
}
