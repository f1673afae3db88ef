//! Renderer-facing report artifacts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::depot::Location;
use crate::layout::{PageGrid, RenderedChart};
use crate::period::ReportPeriod;
use crate::stock::{MonthlyBalance, StockSnapshot};

/// Title lines of one monthly statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportHeader {
    /// Main title, e.g. "FUEL REPORT: NORTH QUARRY".
    pub title: String,
    /// Period line, e.g. "PERIOD JANUARY 2024".
    pub period_label: String,
}

impl ReportHeader {
    /// Builds the header for one location and period.
    #[must_use]
    pub fn new(location_name: &str, period: &ReportPeriod) -> Self {
        Self {
            title: format!("FUEL REPORT: {location_name}"),
            period_label: format!("PERIOD {}", period.month_label()),
        }
    }
}

/// One calendar-month statement: header plus its laid-out pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyStatement {
    /// Title lines.
    pub header: ReportHeader,
    /// The period this statement covers.
    pub period: ReportPeriod,
    /// Stock position over the period (raw totals).
    pub snapshot: StockSnapshot,
    /// Page grids emitted by the layout engine.
    pub pages: Vec<PageGrid>,
}

/// Totals row of the monthly recap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecapTotals {
    /// Inflow over the whole range.
    pub total_in: Decimal,
    /// Outflow over the whole range.
    pub total_out: Decimal,
    /// Closing balance of the last period.
    pub closing: Decimal,
}

impl RecapTotals {
    /// Sums the recap rows; an empty range yields zero totals.
    #[must_use]
    pub fn from_rows(rows: &[MonthlyBalance]) -> Self {
        Self {
            total_in: rows.iter().map(|r| r.snapshot.total_in).sum(),
            total_out: rows.iter().map(|r| r.snapshot.total_out).sum(),
            closing: rows.last().map_or(Decimal::ZERO, |r| r.snapshot.closing),
        }
    }
}

/// Range-wide month-by-month summary closing the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRecap {
    /// One row per report period.
    pub rows: Vec<MonthlyBalance>,
    /// Range totals.
    pub totals: RecapTotals,
    /// Optional inflow/outflow bar chart.
    pub chart: Option<RenderedChart>,
}

/// The complete renderer-facing report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelReport {
    /// The depot the report covers.
    pub location: Location,
    /// The requested date range.
    pub range: ReportPeriod,
    /// One statement per calendar month.
    pub statements: Vec<MonthlyStatement>,
    /// Range-wide recap.
    pub recap: MonthlyRecap,
}
