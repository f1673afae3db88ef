//! Page grid artifacts emitted by the layout engine.

use serde::{Deserialize, Serialize};

use super::block::RenderedChart;
use super::style::CellStyle;

/// Total columns per page: 6 left + 1 gutter + 5 right.
pub const GRID_COLUMNS: usize = 12;
/// Grid rows per page.
pub const ROWS_PER_PAGE: usize = 40;
/// A chart is deferred to the next page when fewer rows than this remain.
pub const MIN_CHART_ROWS: usize = 5;

/// Content of a single grid cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellContent {
    /// Nothing in this cell.
    #[default]
    Empty,
    /// Text content.
    Text(String),
    /// An embedded chart image anchored at this cell.
    Image(RenderedChart),
}

/// One cell of a page grid: content plus style directives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    /// Cell content.
    pub content: CellContent,
    /// Style directives for the renderer.
    pub style: CellStyle,
}

/// An inclusive rectangular cell range to be merged by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRange {
    /// First row of the range.
    pub start_row: usize,
    /// First column of the range.
    pub start_col: usize,
    /// Last row of the range (inclusive).
    pub end_row: usize,
    /// Last column of the range (inclusive).
    pub end_col: usize,
}

/// One page of the report: a matrix of styled cells plus merge directives.
///
/// Immutable once emitted; holds only the rows actually produced (at most
/// [`ROWS_PER_PAGE`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageGrid {
    /// Rows of [`GRID_COLUMNS`] cells each.
    pub rows: Vec<Vec<GridCell>>,
    /// Cell ranges the renderer must merge.
    pub merges: Vec<CellRange>,
}

impl PageGrid {
    /// A fresh row of empty unstyled cells.
    #[must_use]
    pub fn blank_row() -> Vec<GridCell> {
        (0..GRID_COLUMNS).map(|_| GridCell::default()).collect()
    }

    /// Number of rows this page produced.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
