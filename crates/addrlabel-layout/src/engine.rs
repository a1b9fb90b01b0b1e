//! Record placement onto label cells.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use addrlabel_model::{
    CleanedRecord, LabelCell, LabelMetrics, LabelSheet, PlacedLine, Placement, Point,
};

use crate::error::{LayoutError, Result};
use crate::grid::build_cells;
use crate::wrap::wrap_fixed_width;

/// Text drawn in place of an empty display name.
pub const NAME_PLACEHOLDER: &str = "氏名未記入";

/// Postal mark printed before the postal code.
pub const POSTAL_MARK: &str = "〒";

/// Placed records reported at `debug` every this many placements.
const PROGRESS_INTERVAL: usize = 100;

/// Result of one layout run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelLayout {
    pub sheet: LabelSheet,
    /// Placements in input order, restricted to eligible records.
    pub placements: Vec<Placement>,
    pub page_count: usize,
    /// Rows of records that were not printable.
    pub skipped_rows: Vec<usize>,
}

impl LabelLayout {
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Placements on `page_index`.
    pub fn page(&self, page_index: usize) -> impl Iterator<Item = &Placement> {
        self.placements
            .iter()
            .filter(move |placement| placement.page_index() == page_index)
    }

    /// Number of placements on each page.
    pub fn page_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.page_count];
        for placement in &self.placements {
            sizes[placement.page_index()] += 1;
        }
        sizes
    }
}

/// Running position over placed records only.
#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    placed: usize,
    page_index: usize,
    used_on_page: usize,
}

impl Cursor {
    /// Claim the next `(page, cell)` slot.
    fn advance(&mut self, cells_per_page: usize) -> (usize, usize) {
        let cell_index = self.placed % cells_per_page;
        if cell_index == 0 && self.used_on_page > 0 {
            self.page_index += 1;
            self.used_on_page = 0;
        }
        self.placed += 1;
        self.used_on_page += 1;
        (self.page_index, cell_index)
    }

    fn page_count(&self) -> usize {
        if self.placed == 0 {
            0
        } else {
            self.page_index + 1
        }
    }
}

/// Lays cleaned records out onto a fixed N-up label sheet.
#[derive(Debug, Clone)]
pub struct LabelLayoutEngine {
    sheet: LabelSheet,
    metrics: LabelMetrics,
    cells: Vec<LabelCell>,
}

impl LabelLayoutEngine {
    /// Build an engine, precomputing the cell grid.
    pub fn new(sheet: LabelSheet, metrics: LabelMetrics) -> Result<Self> {
        if metrics.max_chars_per_line == 0 {
            return Err(LayoutError::ZeroLineWidth);
        }
        let cells = build_cells(&sheet)?;
        Ok(Self {
            sheet,
            metrics,
            cells,
        })
    }

    pub fn sheet(&self) -> &LabelSheet {
        &self.sheet
    }

    pub fn metrics(&self) -> &LabelMetrics {
        &self.metrics
    }

    /// Cells of a single page in placement order.
    pub fn cells(&self) -> &[LabelCell] {
        &self.cells
    }

    /// Place every eligible record, in input order.
    ///
    /// Ineligible records are skipped without consuming a cell.
    pub fn layout(&self, records: &[CleanedRecord]) -> LabelLayout {
        let cells_per_page = self.cells.len();
        let mut cursor = Cursor::default();
        let mut placements = Vec::new();
        let mut skipped_rows = Vec::new();

        for record in records {
            if !record.is_eligible() {
                debug!(row = record.row(), "skipping record that is not printable");
                skipped_rows.push(record.row());
                continue;
            }
            let (page_index, cell_index) = cursor.advance(cells_per_page);
            let cell = self.cells[cell_index].on_page(page_index);
            placements.push(self.place(record, cell));
            trace!(row = record.row(), page_index, cell_index, "record placed");
            if placements.len() % PROGRESS_INTERVAL == 0 {
                debug!(
                    placed = placements.len(),
                    total = records.len(),
                    "layout progress"
                );
            }
        }

        let layout = LabelLayout {
            sheet: self.sheet,
            placements,
            page_count: cursor.page_count(),
            skipped_rows,
        };
        info!(
            placed = layout.placed_count(),
            skipped = layout.skipped_rows.len(),
            pages = layout.page_count,
            "layout complete"
        );
        layout
    }

    /// Lines and baselines for one record in `cell`.
    fn place(&self, record: &CleanedRecord, cell: LabelCell) -> Placement {
        let metrics = &self.metrics;
        let x = cell.origin_x + metrics.left_inset;
        let top = cell.top();

        let postal_text = match &record.postal_code {
            Some(code) => format!("{POSTAL_MARK} {code}"),
            None => POSTAL_MARK.to_string(),
        };
        let postal_line = PlacedLine {
            text: postal_text,
            origin: Point::new(x, top - metrics.postal_offset),
            font_size: metrics.postal_font_size,
        };

        let address_lines: Vec<PlacedLine> =
            wrap_fixed_width(&record.address, metrics.max_chars_per_line)
                .into_iter()
                .enumerate()
                .map(|(idx, text)| PlacedLine {
                    text,
                    origin: Point::new(
                        x,
                        top - metrics.address_offset - idx as f64 * metrics.address_line_pitch,
                    ),
                    font_size: metrics.address_font_size,
                })
                .collect();

        let name_y = name_baseline(&cell, metrics, address_lines.len());
        let name_text = if record.name.is_empty() {
            NAME_PLACEHOLDER.to_string()
        } else {
            record.name.clone()
        };
        let name_line = PlacedLine {
            text: name_text,
            origin: Point::new(x, name_y),
            font_size: metrics.name_font_size,
        };

        Placement {
            record_row: record.row(),
            cell,
            postal_line,
            address_lines,
            name_line,
        }
    }
}

/// Name baseline below `line_count` address lines, never under the bottom
/// margin. Overflowing addresses may then overlap the name.
pub fn name_baseline(cell: &LabelCell, metrics: &LabelMetrics, line_count: usize) -> f64 {
    let natural = cell.top()
        - metrics.address_offset
        - line_count as f64 * metrics.address_line_pitch
        - metrics.name_gap;
    natural.max(cell.origin_y + metrics.bottom_margin)
}

/// Lay out `records` on a `columns` x `rows` grid with default metrics.
pub fn layout_records(
    records: &[CleanedRecord],
    page_width: f64,
    page_height: f64,
    columns: usize,
    rows: usize,
) -> Result<Vec<Placement>> {
    let sheet = LabelSheet::new(page_width, page_height, columns, rows);
    let engine = LabelLayoutEngine::new(sheet, LabelMetrics::default())?;
    Ok(engine.layout(records).placements)
}
