//! Read-only store seam between the core and the persistence layer.
//!
//! The core never talks to a database. Callers hand it an implementation of
//! [`TransactionStore`]; read failures surface as [`StoreError`] and are
//! propagated, never retried or silently zeroed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tanklog_shared::types::LocationId;
use thiserror::Error;

use super::types::{FuelIn, FuelOut, Location};
use crate::period::ReportPeriod;

/// Errors surfaced by a [`TransactionStore`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Location record does not exist.
    #[error("Location not found: {0}")]
    LocationNotFound(LocationId),

    /// Backing store could not be read.
    #[error("Depot data unavailable: {0}")]
    Unavailable(String),
}

/// Summed inflow/outflow ahead of a cut-off date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowTotals {
    /// Sum of inflow quantities.
    pub total_in: Decimal,
    /// Sum of outflow quantities (signed; transfers included).
    pub total_out: Decimal,
}

/// Read-only access to depot records.
///
/// Implementations must return transactions ordered ascending by date, then
/// by insertion order, and must not silently drop rows. Missing quantities
/// are reported as zero ("no data" means "no movement").
pub trait TransactionStore {
    /// Reads a location record.
    fn location(&self, id: LocationId) -> Result<Location, StoreError>;

    /// Fetches the inflow records of `id` within `period`, ordered.
    fn fuel_in(&self, id: LocationId, period: &ReportPeriod) -> Result<Vec<FuelIn>, StoreError>;

    /// Fetches the outflow records of `id` within `period`, ordered.
    fn fuel_out(&self, id: LocationId, period: &ReportPeriod) -> Result<Vec<FuelOut>, StoreError>;

    /// Sums all inflow/outflow strictly before `date` (exclusive boundary:
    /// transactions on `date` belong to the period, not the carry-in).
    fn totals_before(&self, id: LocationId, date: NaiveDate) -> Result<FlowTotals, StoreError>;
}
