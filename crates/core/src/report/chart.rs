//! Chart collaborator seam.
//!
//! Chart rendering internals are out of scope for the core: the collaborator
//! returns a ready-made opaque image, and the caller derives the requested
//! row span from bucket counts, never from the renderer.

use crate::depot::FuelOut;
use crate::layout::RenderedChart;
use crate::stock::MonthlyBalance;

/// Renders report charts into opaque images.
pub trait ChartRenderer {
    /// Per-period usage chart over the heavy and vehicle buckets.
    ///
    /// Returns `None` when both buckets are empty.
    fn usage_chart(&self, heavy: &[FuelOut], vehicle: &[FuelOut]) -> Option<RenderedChart>;

    /// Range-wide inflow/outflow chart over the monthly recap rows.
    ///
    /// Returns `None` when there is nothing to chart.
    fn monthly_chart(&self, rows: &[MonthlyBalance]) -> Option<RenderedChart>;
}

/// Chart collaborator that renders nothing; used when charts are disabled.
pub struct NoChartRenderer;

impl ChartRenderer for NoChartRenderer {
    fn usage_chart(&self, _heavy: &[FuelOut], _vehicle: &[FuelOut]) -> Option<RenderedChart> {
        None
    }

    fn monthly_chart(&self, _rows: &[MonthlyBalance]) -> Option<RenderedChart> {
        None
    }
}
