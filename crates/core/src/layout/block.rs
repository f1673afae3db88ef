//! Typed content blocks consumed by the layout engine.
//!
//! Blocks carry their column layout (resolved once at queue-build time), so
//! the engine never computes column offsets from block internals.

use serde::{Deserialize, Serialize};

use super::error::LayoutError;
use super::style::Align;

/// Which half of the page a queue renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    /// Columns 0-5: the consumption ledger.
    Left,
    /// Columns 7-11: inflow, recap, stock summary, chart. Column 6 is a
    /// gutter.
    Right,
}

impl Half {
    /// Number of columns this half provides.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Left => 6,
            Self::Right => 5,
        }
    }

    /// Absolute index of this half's first column.
    #[must_use]
    pub const fn origin(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 7,
        }
    }
}

/// One cell of a data row: text, column span within the half, alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCell {
    /// Cell text.
    pub text: String,
    /// Columns this cell spans within its half.
    pub span: usize,
    /// Horizontal alignment.
    pub align: Align,
}

impl RowCell {
    /// Single-column cell.
    #[must_use]
    pub fn new(text: impl Into<String>, align: Align) -> Self {
        Self {
            text: text.into(),
            span: 1,
            align,
        }
    }

    /// Cell spanning several columns.
    #[must_use]
    pub fn spanning(text: impl Into<String>, span: usize, align: Align) -> Self {
        Self {
            text: text.into(),
            span,
            align,
        }
    }
}

/// Emphasis of a total row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalEmphasis {
    /// Yellow subtotal highlight.
    Highlight,
    /// Green closing-balance emphasis with white text.
    Closing,
}

/// An opaque, ready-made chart image from the chart collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedChart {
    /// Encoded image bytes; the core never inspects them.
    pub png: Vec<u8>,
}

/// The unit the layout engine operates on.
///
/// A closed set of block kinds; each declares the columns it occupies within
/// its half. Only [`ContentBlock::ChartImage`] may consume multiple grid rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Section heading spanning the whole half.
    SectionTitle {
        /// Heading text.
        text: String,
    },
    /// Column header row. One label per column, or a single label merged
    /// across the half (a banner).
    TableHeader {
        /// Column labels.
        columns: Vec<String>,
        /// Background fill, hex color.
        background: String,
        /// Render the labels in dark text instead of white.
        dark_text: bool,
    },
    /// Ledger or summary data row.
    DataRow {
        /// Cells; spans must sum to the half's width.
        cells: Vec<RowCell>,
        /// Alternating-background flag, resolved at build time.
        zebra: bool,
    },
    /// Subtotal row: merged label columns, right-aligned value column.
    TotalRow {
        /// Total label.
        label: String,
        /// Formatted value.
        value: String,
        /// Visual emphasis.
        emphasis: TotalEmphasis,
    },
    /// Embedded chart image with a requested row span.
    ChartImage {
        /// The opaque image.
        image: RenderedChart,
        /// Desired height in grid rows; clipped to the space available, never
        /// exceeded.
        requested_rows: usize,
    },
}

impl ContentBlock {
    /// Validates this block against the half it will render into.
    ///
    /// Queues are built internally, so a failure here is a programming error
    /// caught at build time, never inside the layout loop.
    pub fn validate(&self, half: Half) -> Result<(), LayoutError> {
        match self {
            Self::SectionTitle { .. } | Self::TotalRow { .. } => Ok(()),
            Self::TableHeader { columns, .. } => {
                if columns.len() == 1 || columns.len() == half.width() {
                    Ok(())
                } else {
                    Err(LayoutError::MalformedBlock {
                        expected: half.width(),
                        actual: columns.len(),
                    })
                }
            }
            Self::DataRow { cells, .. } => {
                let occupied: usize = cells.iter().map(|c| c.span).sum();
                if occupied == half.width() && cells.iter().all(|c| c.span >= 1) {
                    Ok(())
                } else {
                    Err(LayoutError::MalformedBlock {
                        expected: half.width(),
                        actual: occupied,
                    })
                }
            }
            Self::ChartImage { requested_rows, .. } => match half {
                Half::Right if *requested_rows >= 1 => Ok(()),
                Half::Right => Err(LayoutError::MalformedBlock {
                    expected: 1,
                    actual: *requested_rows,
                }),
                Half::Left => Err(LayoutError::MisplacedChart),
            },
        }
    }
}
