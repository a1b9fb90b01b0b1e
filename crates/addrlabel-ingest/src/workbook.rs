//! Spreadsheet workbook reading.
//!
//! Uses calamine, which detects the workbook flavour from the file
//! extension.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::error::{IngestError, Result};
use crate::table::{SourceFormat, SourceTable};

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// True when `path` names a workbook rather than a delimited text file.
pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Read worksheet `sheet` of the workbook at `path`.
pub fn read_workbook_sheet(path: &Path, sheet: &str) -> Result<SourceTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;
    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(IngestError::SheetNotFound {
            sheet: sheet.to_string(),
            path: path.to_path_buf(),
        });
    }
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| IngestError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;
    let raw_rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    SourceTable::from_raw_rows(
        path,
        raw_rows,
        SourceFormat::Workbook {
            sheet: sheet.to_string(),
        },
    )
}

/// Text of one cell.
///
/// String cells are returned exactly as stored. Numeric cells print without
/// a trailing `.0` so a priority stored as `1` reads back as `1`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.is_finite() && f.fract() == 0.0 {
                format!("{f:.0}")
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::Error(e) => format!("#ERR:{e:?}"),
    }
}
