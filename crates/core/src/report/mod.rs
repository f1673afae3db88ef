//! Report assembly.
//!
//! Ties the accounting and layout components together into the
//! renderer-facing [`FuelReport`] artifact: one dual-column statement per
//! calendar month plus a range-wide monthly recap.

pub mod chart;
pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use chart::{ChartRenderer, NoChartRenderer};
pub use error::ReportError;
pub use service::ReportService;
pub use types::{FuelReport, MonthlyRecap, MonthlyStatement, RecapTotals, ReportHeader};
