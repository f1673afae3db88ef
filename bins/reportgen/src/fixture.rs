//! JSON fixture input for the report generator.
//!
//! A fixture is a self-contained snapshot of one depot: its location record,
//! both transaction tables, the excluded-unit list, and the report range.
//! The in-memory store serves it to the core the way the production storage
//! layer would.

use chrono::NaiveDate;
use serde::Deserialize;
use tanklog_core::depot::{FlowTotals, FuelIn, FuelOut, Location, StoreError, TransactionStore};
use tanklog_core::period::ReportPeriod;
use tanklog_shared::AppResult;
use tanklog_shared::types::LocationId;

/// One depot's records plus the requested report range.
#[derive(Debug, Deserialize)]
pub struct ReportFixture {
    /// The depot location.
    pub location: Location,
    /// Inflow table.
    #[serde(default)]
    pub fuel_in: Vec<FuelIn>,
    /// Outflow table.
    #[serde(default)]
    pub fuel_out: Vec<FuelOut>,
    /// Full unit identities folded into the "other" recap bucket.
    #[serde(default)]
    pub excluded_units: Vec<String>,
    /// Report range start.
    pub start: NaiveDate,
    /// Report range end.
    pub end: NaiveDate,
}

/// Loads and parses a fixture file.
pub fn load(path: &str) -> AppResult<ReportFixture> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// In-memory [`TransactionStore`] over a fixture.
pub struct FixtureStore {
    fixture: ReportFixture,
}

impl FixtureStore {
    /// Wraps a fixture, sorting both tables date-ascending (stable, so
    /// insertion order breaks ties) as the store contract requires.
    #[must_use]
    pub fn new(mut fixture: ReportFixture) -> Self {
        fixture.fuel_in.sort_by_key(|r| r.date);
        fixture.fuel_out.sort_by_key(|r| r.date);
        Self { fixture }
    }
}

impl TransactionStore for FixtureStore {
    fn location(&self, id: LocationId) -> Result<Location, StoreError> {
        if id == self.fixture.location.id {
            Ok(self.fixture.location.clone())
        } else {
            Err(StoreError::LocationNotFound(id))
        }
    }

    fn fuel_in(&self, _id: LocationId, period: &ReportPeriod) -> Result<Vec<FuelIn>, StoreError> {
        Ok(self
            .fixture
            .fuel_in
            .iter()
            .filter(|r| period.contains_date(r.date))
            .cloned()
            .collect())
    }

    fn fuel_out(&self, _id: LocationId, period: &ReportPeriod) -> Result<Vec<FuelOut>, StoreError> {
        Ok(self
            .fixture
            .fuel_out
            .iter()
            .filter(|r| period.contains_date(r.date))
            .cloned()
            .collect())
    }

    fn totals_before(&self, _id: LocationId, date: NaiveDate) -> Result<FlowTotals, StoreError> {
        Ok(FlowTotals {
            total_in: self
                .fixture
                .fuel_in
                .iter()
                .filter(|r| r.date < date)
                .map(|r| r.quantity)
                .sum(),
            total_out: self
                .fixture
                .fuel_out
                .iter()
                .filter(|r| r.date < date)
                .map(|r| r.quantity)
                .sum(),
        })
    }
}
