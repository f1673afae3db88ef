//! Content queue construction for one report period.
//!
//! The block ordering produced here is a structural contract consumers rely
//! on; see the sequencing tests in this module's test suite.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::block::{ContentBlock, Half, RenderedChart, RowCell, TotalEmphasis};
use super::error::LayoutError;
use super::style::{Align, palette};
use crate::consumption::{ConsumptionBuckets, UnitUsage, aggregate_units};
use crate::depot::{FuelIn, FuelOut};
use crate::stock::StockSnapshot;

/// Requested chart rows per populated chart panel.
pub const CHART_ROWS_PER_PANEL: usize = 12;

const NAME_CHARS: usize = 25;
const UNIT_CHARS: usize = 15;
const NOTE_CHARS: usize = 25;
const RECAP_CHARS: usize = 35;

/// Everything needed to build one period's queues. All data is already
/// fetched and filtered; the builder performs no I/O.
#[derive(Debug)]
pub struct QueueInputs<'a> {
    /// Consumption records, date-ascending, transfers already removed.
    pub consumption: &'a [FuelOut],
    /// Inflow records, date-ascending.
    pub inflow: &'a [FuelIn],
    /// Consumption partitioned into recap buckets.
    pub buckets: &'a ConsumptionBuckets,
    /// Stock position over the period (raw totals, transfers included).
    pub snapshot: &'a StockSnapshot,
    /// Usage chart from the collaborator, if any.
    pub chart: Option<RenderedChart>,
}

/// The two ordered block queues of one period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodQueues {
    /// Consumption ledger blocks (columns 0-5).
    pub left: Vec<ContentBlock>,
    /// Inflow, recap, stock summary, and chart blocks (columns 7-11).
    pub right: Vec<ContentBlock>,
}

/// Builds the left/right content queues for one period.
pub struct ContentQueueBuilder;

impl ContentQueueBuilder {
    /// Builds and validates both queues.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if any produced block occupies columns outside
    /// its half; this is a programming error and fails fast here, never
    /// inside the layout loop.
    pub fn build(inputs: &QueueInputs<'_>) -> Result<PeriodQueues, LayoutError> {
        let queues = PeriodQueues {
            left: Self::build_left(inputs.consumption),
            right: Self::build_right(inputs),
        };

        for block in &queues.left {
            block.validate(Half::Left)?;
        }
        for block in &queues.right {
            block.validate(Half::Right)?;
        }
        Ok(queues)
    }

    /// Left queue: section title, header, one row per consumption record,
    /// total.
    fn build_left(consumption: &[FuelOut]) -> Vec<ContentBlock> {
        let mut blocks = Vec::with_capacity(consumption.len() + 3);
        blocks.push(ContentBlock::SectionTitle {
            text: "A. FUEL CONSUMPTION (OUT)".to_string(),
        });
        blocks.push(ledger_header(&["NO", "DATE", "EQUIPMENT", "UNIT", "LTR", "NOTE"]));

        for (index, record) in consumption.iter().enumerate() {
            blocks.push(ContentBlock::DataRow {
                cells: vec![
                    RowCell::new((index + 1).to_string(), Align::Center),
                    RowCell::new(fmt_date(record.date), Align::Center),
                    RowCell::new(truncate(&record.equipment_name, NAME_CHARS), Align::Left),
                    RowCell::new(truncate(&record.unit_code, UNIT_CHARS), Align::Left),
                    RowCell::new(fmt_liters(record.quantity), Align::Right),
                    RowCell::new(
                        truncate(record.note.as_deref().unwrap_or("-"), NOTE_CHARS),
                        Align::Left,
                    ),
                ],
                zebra: index % 2 == 0,
            });
        }

        let total: Decimal = consumption.iter().map(|r| r.quantity).sum();
        blocks.push(ContentBlock::TotalRow {
            label: "TOTAL CONSUMPTION".to_string(),
            value: fmt_liters(total),
            emphasis: TotalEmphasis::Highlight,
        });
        blocks
    }

    /// Right queue: inflow section, recap section, stock summary, optional
    /// chart.
    fn build_right(inputs: &QueueInputs<'_>) -> Vec<ContentBlock> {
        let mut blocks = Vec::new();

        // 1. Inflow ledger.
        blocks.push(ContentBlock::SectionTitle {
            text: "B. FUEL RECEIVED (IN)".to_string(),
        });
        blocks.push(ledger_header(&["NO", "DATE", "SOURCE", "GRADE", "LTR"]));
        if inputs.inflow.is_empty() {
            // Placeholder so the half is never fully empty.
            blocks.push(ContentBlock::DataRow {
                cells: vec![
                    RowCell::new("-", Align::Center),
                    RowCell::new("-", Align::Center),
                    RowCell::new("NO DATA", Align::Left),
                    RowCell::new("-", Align::Center),
                    RowCell::new("0", Align::Right),
                ],
                zebra: false,
            });
        } else {
            for (index, record) in inputs.inflow.iter().enumerate() {
                blocks.push(ContentBlock::DataRow {
                    cells: vec![
                        RowCell::new((index + 1).to_string(), Align::Center),
                        RowCell::new(fmt_date(record.date), Align::Center),
                        RowCell::new(truncate(&record.supplier, NAME_CHARS), Align::Left),
                        RowCell::new(record.grade.to_string(), Align::Center),
                        RowCell::new(fmt_liters(record.quantity), Align::Right),
                    ],
                    zebra: false,
                });
            }
        }
        blocks.push(ContentBlock::TotalRow {
            label: "TOTAL RECEIVED".to_string(),
            value: fmt_liters(inputs.snapshot.total_in),
            emphasis: TotalEmphasis::Highlight,
        });

        // 2. Recap, one sub-block per non-empty bucket.
        blocks.push(ContentBlock::SectionTitle {
            text: "FUEL USAGE BREAKDOWN".to_string(),
        });
        let buckets = inputs.buckets;
        Self::push_recap(&mut blocks, &buckets.heavy, "TOTAL HEAVY EQUIPMENT", palette::HEAVY_ORANGE, true);
        Self::push_recap(&mut blocks, &buckets.vehicle, "TOTAL VEHICLES & TRUCKS", palette::VEHICLE_BLUE, true);
        Self::push_recap(&mut blocks, &buckets.other, "OTHER UNITS", palette::OTHER_PINK, false);

        // 3. Stock summary: opening, in, out, closing - four fixed rows.
        blocks.push(ContentBlock::SectionTitle {
            text: "REMAINING STOCK DETAIL".to_string(),
        });
        blocks.push(ContentBlock::TableHeader {
            columns: vec!["STOCK SUMMARY".to_string()],
            background: palette::STOCK_GREEN.to_string(),
            dark_text: false,
        });
        let snapshot = inputs.snapshot;
        for (label, value) in [
            ("OPENING STOCK", snapshot.opening),
            ("TOTAL IN", snapshot.total_in),
            ("TOTAL OUT", snapshot.total_out),
        ] {
            blocks.push(labeled_value_row(label, fmt_liters(value)));
        }
        blocks.push(ContentBlock::TotalRow {
            label: "CLOSING STOCK".to_string(),
            value: fmt_liters(snapshot.closing),
            emphasis: TotalEmphasis::Closing,
        });

        // 4. Chart; span derived from populated panels, not from the
        // renderer.
        let panels =
            usize::from(!buckets.heavy.is_empty()) + usize::from(!buckets.vehicle.is_empty());
        if panels > 0
            && let Some(image) = inputs.chart.clone()
        {
            blocks.push(ContentBlock::ChartImage {
                image,
                requested_rows: CHART_ROWS_PER_PANEL * panels,
            });
        }

        blocks
    }

    /// Banner, per-unit rows sorted by liters descending, total. Nothing for
    /// an empty bucket.
    fn push_recap(
        blocks: &mut Vec<ContentBlock>,
        records: &[FuelOut],
        title: &str,
        background: &str,
        dark_text: bool,
    ) {
        if records.is_empty() {
            return;
        }

        blocks.push(ContentBlock::TableHeader {
            columns: vec![title.to_string()],
            background: background.to_string(),
            dark_text,
        });

        let mut usages: Vec<UnitUsage> = aggregate_units(records);
        usages.sort_by(|a, b| b.total.cmp(&a.total));
        for usage in &usages {
            blocks.push(labeled_value_row(
                &truncate(&usage.label, RECAP_CHARS),
                fmt_liters(usage.total),
            ));
        }

        let total: Decimal = records.iter().map(|r| r.quantity).sum();
        blocks.push(ContentBlock::TotalRow {
            label: "TOTAL".to_string(),
            value: fmt_liters(total),
            emphasis: TotalEmphasis::Highlight,
        });
    }
}

/// Blue ledger header with one label per column.
fn ledger_header(columns: &[&str]) -> ContentBlock {
    ContentBlock::TableHeader {
        columns: columns.iter().map(|c| (*c).to_string()).collect(),
        background: palette::HEADER_BLUE.to_string(),
        dark_text: false,
    }
}

/// Right-half row with a merged label and a right-aligned value column.
fn labeled_value_row(label: &str, value: String) -> ContentBlock {
    ContentBlock::DataRow {
        cells: vec![
            RowCell::spanning(label, Half::Right.width() - 1, Align::Left),
            RowCell::new(value, Align::Right),
        ],
        zebra: false,
    }
}

/// Formats liters for display, rounded to whole liters.
fn fmt_liters(quantity: Decimal) -> String {
    quantity.round_dp(0).normalize().to_string()
}

/// Formats a ledger date as day/month.
fn fmt_date(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// Truncates display text to `max_chars`, appending an ellipsis.
fn truncate(text: &str, max_chars: usize) -> String {
    let trimmed = if text.is_empty() { "-" } else { text };
    if trimmed.chars().count() > max_chars {
        let head: String = trimmed.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        trimmed.to_string()
    }
}
