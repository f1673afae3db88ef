//! Stock accumulation over depot transaction history.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tanklog_shared::types::LocationId;

use super::error::StockError;
use super::snapshot::StockSnapshot;
use crate::depot::{FuelIn, FuelOut, TransactionStore};
use crate::period::{ReportPeriod, split_months};

/// Running balance for one report period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyBalance {
    /// The period this row covers.
    pub period: ReportPeriod,
    /// Display label, e.g. "JANUARY 2024".
    pub label: String,
    /// Stock position over the period.
    pub snapshot: StockSnapshot,
}

/// Sums inflow quantities.
#[must_use]
pub fn sum_in(records: &[FuelIn]) -> Decimal {
    records.iter().map(|r| r.quantity).sum()
}

/// Sums outflow quantities (signed; transfers included).
#[must_use]
pub fn sum_out(records: &[FuelOut]) -> Decimal {
    records.iter().map(|r| r.quantity).sum()
}

/// Computes opening stock and month-by-month running balances.
///
/// Pure accumulation over an injected [`TransactionStore`]; all reads happen
/// up front and failures propagate as [`StockError`].
pub struct StockService;

impl StockService {
    /// Opening stock of `location_id` at `date`: the location's baseline
    /// balance plus all inflow and minus all outflow strictly before `date`.
    ///
    /// Transactions dated exactly `date` belong to the period being reported,
    /// not the carry-in.
    pub fn opening_stock<S: TransactionStore>(
        store: &S,
        location_id: LocationId,
        date: NaiveDate,
    ) -> Result<Decimal, StockError> {
        let location = store.location(location_id)?;
        let flows = store.totals_before(location_id, date)?;
        Ok(location.baseline_stock + flows.total_in - flows.total_out)
    }

    /// Running balance rows for every calendar-month period of
    /// `[start, end]`, chained so each period's opening equals the previous
    /// period's closing.
    pub fn monthly_ledger<S: TransactionStore>(
        store: &S,
        location_id: LocationId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MonthlyBalance>, StockError> {
        let periods = split_months(start, end)?;
        let mut opening = Self::opening_stock(store, location_id, start)?;

        let mut rows = Vec::with_capacity(periods.len());
        for period in periods {
            let total_in = sum_in(&store.fuel_in(location_id, &period)?);
            let total_out = sum_out(&store.fuel_out(location_id, &period)?);
            let snapshot = StockSnapshot::new(opening, total_in, total_out);
            opening = snapshot.closing;
            rows.push(MonthlyBalance {
                label: period.month_label(),
                period,
                snapshot,
            });
        }

        Ok(rows)
    }
}
