//! Dual-cursor page layout.
//!
//! Two queues advance independently down fixed-size page grids. Layout is
//! greedy: no content height is pre-measured, pages fill row by row until
//! both cursors are exhausted, and a chart reserves a multi-row span on the
//! right half as it is placed.

use super::block::{ContentBlock, Half, TotalEmphasis};
use super::grid::{CellContent, CellRange, GRID_COLUMNS, GridCell, MIN_CHART_ROWS, PageGrid, ROWS_PER_PAGE};
use super::queue::PeriodQueues;
use super::style::{Align, CellStyle, palette};

/// Cursor state threaded through the per-row step function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutState {
    /// Next unconsumed block of the left queue.
    pub left_ptr: usize,
    /// Next unconsumed block of the right queue.
    pub right_ptr: usize,
    /// Last page row (inclusive) reserved by an in-progress chart span.
    pub right_occupied_until: Option<usize>,
}

impl LayoutState {
    /// Initial state: both cursors at the queue heads, nothing reserved.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a chart span claims the right half of `row_index`.
    #[must_use]
    pub fn right_reserved(&self, row_index: usize) -> bool {
        self.right_occupied_until.is_some_and(|until| row_index <= until)
    }
}

/// One emitted grid row plus the merges it introduced.
#[derive(Debug, Clone, PartialEq)]
pub struct RowOutput {
    /// The row's cells.
    pub cells: Vec<GridCell>,
    /// Merge ranges anchored at this row (a chart merge spans further rows).
    pub merges: Vec<CellRange>,
}

/// The dual-column page layout engine.
pub struct PageLayoutEngine;

impl PageLayoutEngine {
    /// Lays both queues out onto consecutive page grids.
    ///
    /// Order is preserved and no block is dropped or duplicated; see the
    /// layout test suite for the enforced properties.
    #[must_use]
    pub fn paginate(queues: &PeriodQueues) -> Vec<PageGrid> {
        let mut pages = Vec::new();
        let mut state = LayoutState::new();

        loop {
            let page = Self::lay_out_page(queues, &mut state);
            if page.rows.is_empty() {
                break;
            }
            pages.push(page);
            if state.left_ptr >= queues.left.len() && state.right_ptr >= queues.right.len() {
                break;
            }
        }

        pages
    }

    /// Produces one page, advancing the cursors.
    ///
    /// A chart reservation never crosses a page boundary (its span is clipped
    /// to the rows left), so the reservation resets here.
    fn lay_out_page(queues: &PeriodQueues, state: &mut LayoutState) -> PageGrid {
        state.right_occupied_until = None;
        let mut page = PageGrid::default();

        for row_index in 0..ROWS_PER_PAGE {
            let exhausted = state.left_ptr >= queues.left.len()
                && state.right_ptr >= queues.right.len()
                && !state.right_reserved(row_index);
            if exhausted {
                break;
            }

            let (next, row) = Self::step(queues, *state, row_index);
            *state = next;
            page.rows.push(row.cells);
            page.merges.extend(row.merges);
        }

        page
    }

    /// Pure per-row step: renders at most one block per half into a fresh
    /// row and returns the advanced state.
    ///
    /// A chart that does not fit the rows left on the page
    /// (`rows_left < MIN_CHART_ROWS`) leaves the right half blank and is NOT
    /// consumed; it is retried at the top of the next page.
    #[must_use]
    pub fn step(queues: &PeriodQueues, state: LayoutState, row_index: usize) -> (LayoutState, RowOutput) {
        let mut next = state;
        let mut row = RowOutput {
            cells: PageGrid::blank_row(),
            merges: Vec::new(),
        };

        if let Some(block) = queues.left.get(state.left_ptr) {
            render_block(&mut row, block, Half::Left, row_index);
            next.left_ptr += 1;
        }

        if state.right_reserved(row_index) {
            // Row already claimed by a chart span.
        } else if let Some(block) = queues.right.get(state.right_ptr) {
            if let ContentBlock::ChartImage { image, requested_rows } = block {
                let rows_left = ROWS_PER_PAGE - row_index;
                if rows_left >= MIN_CHART_ROWS {
                    let span = (*requested_rows).min(rows_left);
                    let origin = Half::Right.origin();
                    row.cells[origin] = GridCell {
                        content: CellContent::Image(image.clone()),
                        style: CellStyle::bordered(Align::Center),
                    };
                    row.merges.push(CellRange {
                        start_row: row_index,
                        start_col: origin,
                        end_row: row_index + span - 1,
                        end_col: GRID_COLUMNS - 1,
                    });
                    next.right_occupied_until = Some(row_index + span - 1);
                    next.right_ptr += 1;
                }
            } else {
                render_block(&mut row, block, Half::Right, row_index);
                next.right_ptr += 1;
            }
        }

        (next, row)
    }
}

/// Renders a single-row block into its half of `row`.
fn render_block(row: &mut RowOutput, block: &ContentBlock, half: Half, row_index: usize) {
    let origin = half.origin();
    let width = half.width();

    match block {
        ContentBlock::SectionTitle { text } => {
            row.cells[origin] = GridCell {
                content: CellContent::Text(text.clone()),
                style: CellStyle {
                    text_color: Some(palette::HEADER_BLUE.to_string()),
                    bold: true,
                    ..CellStyle::default()
                },
            };
            row.merges.push(half_merge(row_index, origin, width));
        }
        ContentBlock::TableHeader {
            columns,
            background,
            dark_text,
        } => {
            let mut style = CellStyle::header(background);
            if *dark_text {
                style.text_color = None;
            }
            if columns.len() == 1 {
                row.cells[origin] = GridCell {
                    content: CellContent::Text(columns[0].clone()),
                    style,
                };
                row.merges.push(half_merge(row_index, origin, width));
            } else {
                for (offset, label) in columns.iter().enumerate() {
                    row.cells[origin + offset] = GridCell {
                        content: CellContent::Text(label.clone()),
                        style: style.clone(),
                    };
                }
            }
        }
        ContentBlock::DataRow { cells, zebra } => {
            let background = zebra.then(|| palette::ZEBRA_GREY.to_string());
            let mut column = origin;
            for cell in cells {
                row.cells[column] = GridCell {
                    content: CellContent::Text(cell.text.clone()),
                    style: CellStyle {
                        background: background.clone(),
                        ..CellStyle::bordered(cell.align)
                    },
                };
                if cell.span > 1 {
                    row.merges.push(CellRange {
                        start_row: row_index,
                        start_col: column,
                        end_row: row_index,
                        end_col: column + cell.span - 1,
                    });
                }
                column += cell.span;
            }
        }
        ContentBlock::TotalRow {
            label,
            value,
            emphasis,
        } => {
            let background = match emphasis {
                TotalEmphasis::Highlight => palette::TOTAL_YELLOW,
                TotalEmphasis::Closing => palette::STOCK_GREEN,
            };
            let mut label_style = CellStyle::total(background, Align::Left);
            let mut value_style = CellStyle::total(background, Align::Right);
            if matches!(emphasis, TotalEmphasis::Closing) {
                label_style.text_color = Some(palette::TEXT_WHITE.to_string());
                value_style.text_color = Some(palette::TEXT_WHITE.to_string());
            }

            row.cells[origin] = GridCell {
                content: CellContent::Text(label.clone()),
                style: label_style,
            };
            row.cells[origin + width - 1] = GridCell {
                content: CellContent::Text(value.clone()),
                style: value_style,
            };
            if width > 2 {
                row.merges.push(CellRange {
                    start_row: row_index,
                    start_col: origin,
                    end_row: row_index,
                    end_col: origin + width - 2,
                });
            }
        }
        // Charts are handled in the step function; queue validation keeps
        // them out of the left half.
        ContentBlock::ChartImage { .. } => debug_assert!(false, "chart reached render_block"),
    }
}

/// Merge range covering a whole half of one row.
fn half_merge(row_index: usize, origin: usize, width: usize) -> CellRange {
    CellRange {
        start_row: row_index,
        start_col: origin,
        end_row: row_index,
        end_col: origin + width - 1,
    }
}
