//! Report generation service.

use std::collections::HashSet;

use chrono::NaiveDate;
use tanklog_shared::types::LocationId;

use super::chart::ChartRenderer;
use super::error::ReportError;
use super::types::{FuelReport, MonthlyRecap, MonthlyStatement, RecapTotals, ReportHeader};
use crate::consumption::{exclude_non_consumption, segregate};
use crate::depot::TransactionStore;
use crate::layout::{ContentQueueBuilder, PageLayoutEngine, QueueInputs};
use crate::period::{ReportPeriod, split_months};
use crate::stock::{StockService, StockSnapshot, sum_in, sum_out};

/// Generates complete fuel reports.
///
/// All store and chart collaborator calls happen here, before the layout
/// algorithm runs; the layout itself is pure. Any collaborator failure
/// aborts the whole report.
pub struct ReportService;

impl ReportService {
    /// Generates the report for `location_id` over `[start, end]`.
    ///
    /// Units listed in `excluded_units` (by full unit identity) are folded
    /// into the "other" recap bucket.
    ///
    /// # Errors
    ///
    /// [`ReportError::InvalidDateRange`] when `start > end` (rejected before
    /// any computation); [`ReportError::DataUnavailable`] when the store
    /// cannot be read.
    pub fn generate<S: TransactionStore, C: ChartRenderer>(
        store: &S,
        charts: &C,
        location_id: LocationId,
        start: NaiveDate,
        end: NaiveDate,
        excluded_units: &HashSet<String>,
    ) -> Result<FuelReport, ReportError> {
        let periods = split_months(start, end)?;
        let location = store.location(location_id)?;

        let mut statements = Vec::with_capacity(periods.len());
        for period in &periods {
            statements.push(Self::build_statement(
                store,
                charts,
                location_id,
                &location.name,
                period,
                excluded_units,
            )?);
        }

        let rows = StockService::monthly_ledger(store, location_id, start, end)?;
        let recap = MonthlyRecap {
            totals: RecapTotals::from_rows(&rows),
            chart: charts.monthly_chart(&rows),
            rows,
        };

        Ok(FuelReport {
            location,
            range: ReportPeriod::new(start, end),
            statements,
            recap,
        })
    }

    /// Builds one calendar-month statement.
    fn build_statement<S: TransactionStore, C: ChartRenderer>(
        store: &S,
        charts: &C,
        location_id: LocationId,
        location_name: &str,
        period: &ReportPeriod,
        excluded_units: &HashSet<String>,
    ) -> Result<MonthlyStatement, ReportError> {
        let inflow = store.fuel_in(location_id, period)?;
        let outflow = store.fuel_out(location_id, period)?;
        let opening = StockService::opening_stock(store, location_id, period.start)?;

        // Raw totals (transfers included) drive the balance arithmetic; the
        // consumption view drives the ledger and recap.
        let snapshot = StockSnapshot::new(opening, sum_in(&inflow), sum_out(&outflow));
        let consumption = exclude_non_consumption(outflow);
        let buckets = segregate(consumption.clone(), excluded_units);
        let chart = charts.usage_chart(&buckets.heavy, &buckets.vehicle);

        let queues = ContentQueueBuilder::build(&QueueInputs {
            consumption: &consumption,
            inflow: &inflow,
            buckets: &buckets,
            snapshot: &snapshot,
            chart,
        })?;
        let pages = PageLayoutEngine::paginate(&queues);

        Ok(MonthlyStatement {
            header: ReportHeader::new(location_name, period),
            period: *period,
            snapshot,
            pages,
        })
    }
}
