//! Calendar-month splitting of report date ranges.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while splitting a report range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    /// End date precedes start date.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },
}

/// An inclusive date range, contained within one calendar month after
/// splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period (inclusive).
    pub end: NaiveDate,
}

impl ReportPeriod {
    /// Creates a period without validation; callers are expected to hold
    /// `start <= end`.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Display label for the period's month, e.g. "JANUARY 2024".
    #[must_use]
    pub fn month_label(&self) -> String {
        self.start.format("%B %Y").to_string().to_uppercase()
    }
}

/// First day of the month following `date`'s month.
fn next_month_start(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("first day of month is a valid date")
}

/// Splits `[start, end]` into ordered single-month sub-ranges.
///
/// The first period starts at `start`, the last ends at `end`, and the
/// ordered union of all periods covers the input range exactly, with no gaps
/// or overlaps.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidRange`] when `start > end`.
pub fn split_months(start: NaiveDate, end: NaiveDate) -> Result<Vec<ReportPeriod>, PeriodError> {
    if start > end {
        return Err(PeriodError::InvalidRange { start, end });
    }

    let mut periods = Vec::new();
    let mut cursor =
        NaiveDate::from_ymd_opt(start.year(), start.month(), 1).expect("first day of month is a valid date");

    while cursor <= end {
        let next = next_month_start(cursor);
        let month_start = start.max(cursor);
        let month_end = end.min(next.pred_opt().expect("month start has a predecessor"));
        if month_start <= month_end {
            periods.push(ReportPeriod::new(month_start, month_end));
        }
        cursor = next;
    }

    Ok(periods)
}
