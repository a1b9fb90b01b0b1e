//! Format-independent view of a loaded contact list.

use std::path::Path;

use crate::csv_table::SourceEncoding;
use crate::error::{IngestError, Result};

/// Where a table's rows came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFormat {
    Csv(SourceEncoding),
    /// A worksheet of a spreadsheet workbook.
    Workbook { sheet: String },
}

/// Header row plus data rows, every row padded to the header width.
///
/// Data cells hold the source text unchanged. Only header names are
/// normalized.
#[derive(Debug, Clone)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub format: SourceFormat,
}

impl SourceTable {
    /// Build a table from raw rows; the first non-blank row is the header.
    pub fn from_raw_rows(
        path: &Path,
        raw_rows: Vec<Vec<String>>,
        format: SourceFormat,
    ) -> Result<Self> {
        let mut raw_rows = raw_rows.into_iter().filter(|row| !is_blank_row(row));
        let Some(header_row) = raw_rows.next() else {
            return Err(IngestError::EmptySource {
                path: path.to_path_buf(),
            });
        };
        let headers: Vec<String> = header_row.iter().map(|value| normalize_header(value)).collect();
        let rows = raw_rows
            .map(|mut record| {
                record.resize(headers.len(), String::new());
                record
            })
            .collect();
        Ok(Self {
            headers,
            rows,
            format,
        })
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|value| value.trim().is_empty())
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}
