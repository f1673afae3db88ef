//! End-to-end report generation tests.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tanklog_shared::types::{FuelGrade, FuelInId, FuelOutId, LocationId};

use super::chart::{ChartRenderer, NoChartRenderer};
use super::error::ReportError;
use super::service::ReportService;
use crate::depot::{FlowTotals, FuelIn, FuelOut, Location, StoreError, TransactionStore};
use crate::layout::{CellContent, PageGrid, RenderedChart};
use crate::period::ReportPeriod;
use crate::stock::MonthlyBalance;

struct MemoryStore {
    location: Location,
    fuel_in: Vec<FuelIn>,
    fuel_out: Vec<FuelOut>,
}

impl MemoryStore {
    fn new(baseline: Decimal) -> Self {
        Self {
            location: Location {
                id: LocationId::new(),
                name: "NORTH QUARRY".to_string(),
                baseline_stock: baseline,
            },
            fuel_in: Vec::new(),
            fuel_out: Vec::new(),
        }
    }

    fn with_in(mut self, date: NaiveDate, quantity: Decimal) -> Self {
        self.fuel_in.push(FuelIn {
            id: FuelInId::new(),
            location_id: self.location.id,
            date,
            quantity,
            supplier: "AGENT X".to_string(),
            grade: FuelGrade::Diesel,
            note: None,
        });
        self
    }

    fn with_out(
        mut self,
        date: NaiveDate,
        name: &str,
        unit: &str,
        quantity: Decimal,
        note: Option<&str>,
    ) -> Self {
        self.fuel_out.push(FuelOut {
            id: FuelOutId::new(),
            location_id: self.location.id,
            date,
            quantity,
            equipment_name: name.to_string(),
            unit_code: unit.to_string(),
            note: note.map(str::to_string),
        });
        self
    }
}

impl TransactionStore for MemoryStore {
    fn location(&self, id: LocationId) -> Result<Location, StoreError> {
        if id == self.location.id {
            Ok(self.location.clone())
        } else {
            Err(StoreError::LocationNotFound(id))
        }
    }

    fn fuel_in(&self, _id: LocationId, period: &ReportPeriod) -> Result<Vec<FuelIn>, StoreError> {
        Ok(self
            .fuel_in
            .iter()
            .filter(|r| period.contains_date(r.date))
            .cloned()
            .collect())
    }

    fn fuel_out(&self, _id: LocationId, period: &ReportPeriod) -> Result<Vec<FuelOut>, StoreError> {
        Ok(self
            .fuel_out
            .iter()
            .filter(|r| period.contains_date(r.date))
            .cloned()
            .collect())
    }

    fn totals_before(&self, _id: LocationId, date: NaiveDate) -> Result<FlowTotals, StoreError> {
        Ok(FlowTotals {
            total_in: self
                .fuel_in
                .iter()
                .filter(|r| r.date < date)
                .map(|r| r.quantity)
                .sum(),
            total_out: self
                .fuel_out
                .iter()
                .filter(|r| r.date < date)
                .map(|r| r.quantity)
                .sum(),
        })
    }
}

/// Store whose every read fails.
struct BrokenStore;

impl TransactionStore for BrokenStore {
    fn location(&self, _id: LocationId) -> Result<Location, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn fuel_in(&self, _id: LocationId, _period: &ReportPeriod) -> Result<Vec<FuelIn>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn fuel_out(&self, _id: LocationId, _period: &ReportPeriod) -> Result<Vec<FuelOut>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn totals_before(&self, _id: LocationId, _date: NaiveDate) -> Result<FlowTotals, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// Chart collaborator returning a fixed image.
struct StubChartRenderer;

impl ChartRenderer for StubChartRenderer {
    fn usage_chart(&self, heavy: &[FuelOut], vehicle: &[FuelOut]) -> Option<RenderedChart> {
        (!heavy.is_empty() || !vehicle.is_empty()).then(|| RenderedChart { png: vec![0xAA] })
    }

    fn monthly_chart(&self, rows: &[MonthlyBalance]) -> Option<RenderedChart> {
        (!rows.is_empty()).then(|| RenderedChart { png: vec![0xBB] })
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Finds the value cell of a left-half total row with the given label.
fn left_total_value(pages: &[PageGrid], label: &str) -> Option<String> {
    pages.iter().flat_map(|p| &p.rows).find_map(|row| {
        match (&row[0].content, &row[5].content) {
            (CellContent::Text(cell_label), CellContent::Text(value)) if cell_label == label => {
                Some(value.clone())
            }
            _ => None,
        }
    })
}

fn page_texts(pages: &[PageGrid]) -> Vec<String> {
    pages
        .iter()
        .flat_map(|p| &p.rows)
        .flatten()
        .filter_map(|cell| match &cell.content {
            CellContent::Text(text) => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_multi_month_report_shape() {
    let store = MemoryStore::new(dec!(100))
        .with_in(date(2024, 1, 5), dec!(50)) // before the range
        .with_out(date(2024, 1, 8), "EXCAVATOR PC200", "EX-01", dec!(30), None)
        .with_in(date(2024, 1, 20), dec!(200))
        .with_out(date(2024, 2, 10), "DUMP TRUCK HINO", "DT-01", dec!(45), None)
        .with_out(date(2024, 3, 5), "VIBRO ROLLER", "VR-01", dec!(25), None);
    let id = store.location.id;

    let report = ReportService::generate(
        &store,
        &NoChartRenderer,
        id,
        date(2024, 1, 15),
        date(2024, 3, 10),
        &HashSet::new(),
    )
    .unwrap();

    assert_eq!(report.statements.len(), 3);
    assert_eq!(report.statements[0].header.title, "FUEL REPORT: NORTH QUARRY");
    assert_eq!(report.statements[0].header.period_label, "PERIOD JANUARY 2024");
    assert_eq!(report.statements[2].header.period_label, "PERIOD MARCH 2024");
    assert!(report.statements.iter().all(|s| !s.pages.is_empty()));

    // Opening replays everything before the range: 100 + 50 - 30.
    assert_eq!(report.statements[0].snapshot.opening, dec!(120));

    // Statements chain across months.
    for pair in report.statements.windows(2) {
        assert_eq!(pair[1].snapshot.opening, pair[0].snapshot.closing);
    }

    // Recap mirrors the statement chain.
    assert_eq!(report.recap.rows.len(), 3);
    assert_eq!(report.recap.totals.total_in, dec!(200));
    assert_eq!(report.recap.totals.total_out, dec!(70));
    assert_eq!(
        report.recap.totals.closing,
        report.statements.last().unwrap().snapshot.closing
    );
}

#[test]
fn test_reversed_range_rejected_before_any_read() {
    // BrokenStore fails every read; the range check must come first.
    let err = ReportService::generate(
        &BrokenStore,
        &NoChartRenderer,
        LocationId::new(),
        date(2024, 3, 1),
        date(2024, 1, 1),
        &HashSet::new(),
    )
    .unwrap_err();

    assert!(matches!(err, ReportError::InvalidDateRange { .. }));
    assert_eq!(err.error_code(), "INVALID_RANGE");
}

#[test]
fn test_store_failure_aborts_whole_report() {
    let err = ReportService::generate(
        &BrokenStore,
        &NoChartRenderer,
        LocationId::new(),
        date(2024, 1, 1),
        date(2024, 1, 31),
        &HashSet::new(),
    )
    .unwrap_err();

    assert!(matches!(err, ReportError::DataUnavailable(_)));
}

#[test]
fn test_consumption_total_excludes_transfers_but_balance_keeps_them() {
    // One real consumption of 30 plus the receiving side of a 40-liter loan:
    // the ledger total shows 30, the stock arithmetic keeps all 70.
    let store = MemoryStore::new(dec!(500))
        .with_out(date(2024, 1, 8), "EXCAVATOR PC200", "EX-01", dec!(30), None)
        .with_out(
            date(2024, 1, 9),
            "DUMP TRUCK HINO",
            "DT-01",
            dec!(40),
            Some("Loan from VR-01"),
        );
    let id = store.location.id;

    let report = ReportService::generate(
        &store,
        &NoChartRenderer,
        id,
        date(2024, 1, 1),
        date(2024, 1, 31),
        &HashSet::new(),
    )
    .unwrap();

    let statement = &report.statements[0];
    assert_eq!(statement.snapshot.total_out, dec!(70));
    assert_eq!(statement.snapshot.closing, dec!(430));
    assert_eq!(
        left_total_value(&statement.pages, "TOTAL CONSUMPTION").as_deref(),
        Some("30")
    );
}

#[test]
fn test_usage_and_recap_charts_are_embedded() {
    let store = MemoryStore::new(dec!(100))
        .with_out(date(2024, 1, 8), "EXCAVATOR PC200", "EX-01", dec!(30), None);
    let id = store.location.id;

    let report = ReportService::generate(
        &store,
        &StubChartRenderer,
        id,
        date(2024, 1, 1),
        date(2024, 1, 31),
        &HashSet::new(),
    )
    .unwrap();

    let has_image = report.statements[0]
        .pages
        .iter()
        .flat_map(|p| &p.rows)
        .flatten()
        .any(|cell| matches!(cell.content, CellContent::Image(_)));
    assert!(has_image);
    assert!(report.recap.chart.is_some());
}

#[test]
fn test_excluded_units_surface_in_other_bucket() {
    let store = MemoryStore::new(dec!(100))
        .with_out(date(2024, 1, 8), "EXCAVATOR PC200", "EX-01", dec!(30), None)
        .with_out(date(2024, 1, 9), "GENSET", "GS-01", dec!(10), None);
    let id = store.location.id;
    let excluded: HashSet<String> = ["GENSET GS-01".to_string()].into();

    let report = ReportService::generate(
        &store,
        &NoChartRenderer,
        id,
        date(2024, 1, 1),
        date(2024, 1, 31),
        &excluded,
    )
    .unwrap();

    let texts = page_texts(&report.statements[0].pages);
    assert!(texts.iter().any(|t| t == "OTHER UNITS"));
    assert!(texts.iter().any(|t| t == "GENSET GS-01"));
}
