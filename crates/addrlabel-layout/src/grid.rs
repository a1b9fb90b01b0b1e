//! Label cell grid.

use addrlabel_model::{LabelCell, LabelSheet};

use crate::error::{LayoutError, Result};

/// Validate a sheet's page size and grid shape.
pub fn validate_sheet(sheet: &LabelSheet) -> Result<()> {
    if sheet.columns == 0 || sheet.rows == 0 {
        return Err(LayoutError::EmptyGrid {
            columns: sheet.columns,
            rows: sheet.rows,
        });
    }
    let positive = |value: f64| value.is_finite() && value > 0.0;
    if !positive(sheet.page_width) || !positive(sheet.page_height) {
        return Err(LayoutError::InvalidPageSize {
            width: sheet.page_width,
            height: sheet.page_height,
        });
    }
    Ok(())
}

/// The cells of one page, in placement order.
///
/// Cells are enumerated column-major: the left column top to bottom, then the
/// next column. Origins are bottom-left corners with y growing upward. Every
/// returned cell has `page_index` 0.
pub fn build_cells(sheet: &LabelSheet) -> Result<Vec<LabelCell>> {
    validate_sheet(sheet)?;
    let width = sheet.cell_width();
    let height = sheet.cell_height();
    let mut cells = Vec::with_capacity(sheet.cells_per_page());
    for column in 0..sheet.columns {
        for row in 0..sheet.rows {
            cells.push(LabelCell {
                page_index: 0,
                cell_index: cells.len(),
                origin_x: width * column as f64,
                origin_y: sheet.page_height - height * (row + 1) as f64,
                width,
                height,
            });
        }
    }
    Ok(cells)
}
