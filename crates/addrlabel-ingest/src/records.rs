//! Mapping source rows onto contact records.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use addrlabel_model::Record;

use crate::csv_table::read_csv_table;
use crate::error::{IngestError, Result};
use crate::table::SourceTable;
use crate::workbook::{is_workbook, read_workbook_sheet};

/// Default sheet name of the sales list.
pub const DEFAULT_SHEET: &str = "営業リスト";

/// Header names of the required columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    pub priority: String,
    pub name: String,
    pub postal_code: String,
    pub address: String,
    pub prefecture: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            priority: "優先順位".to_string(),
            name: "氏名".to_string(),
            postal_code: "郵便番号".to_string(),
            address: "住所（標準化）".to_string(),
            prefecture: "都道府県".to_string(),
        }
    }
}

impl ColumnNames {
    fn all(&self) -> [&str; 5] {
        [
            self.priority.as_str(),
            self.name.as_str(),
            self.postal_code.as_str(),
            self.address.as_str(),
            self.prefecture.as_str(),
        ]
    }
}

/// Options controlling how a contact list is located and read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    pub columns: ColumnNames,
    /// Worksheet to read from a workbook, or `<dir>/<sheet>.csv` when the
    /// input path is a directory.
    pub sheet: String,
    /// Keep only the first N records.
    pub limit: Option<usize>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            sheet: DEFAULT_SHEET.to_string(),
            limit: None,
        }
    }
}

impl IngestOptions {
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = sheet.into();
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }
}

/// Resolve the source file for `input`: the file itself, or `<input>/<sheet>.csv`.
pub fn resolve_source(input: &Path, sheet: &str) -> Result<PathBuf> {
    if input.is_dir() {
        let path = input.join(format!("{sheet}.csv"));
        if path.is_file() {
            Ok(path)
        } else {
            Err(IngestError::SheetNotFound {
                sheet: sheet.to_string(),
                path: input.to_path_buf(),
            })
        }
    } else if input.is_file() {
        Ok(input.to_path_buf())
    } else {
        Err(IngestError::FileNotFound {
            path: input.to_path_buf(),
        })
    }
}

/// Load contact records from `input`.
///
/// Fails before producing any record when a required column is missing.
pub fn load_records(input: &Path, options: &IngestOptions) -> Result<Vec<Record>> {
    let path = resolve_source(input, &options.sheet)?;
    let table = if is_workbook(&path) {
        read_workbook_sheet(&path, &options.sheet)?
    } else {
        read_csv_table(&path)?
    };
    info!(
        path = %path.display(),
        format = ?table.format,
        rows = table.rows.len(),
        columns = table.headers.len(),
        "read contact list"
    );
    records_from_table(&table, &path, options)
}

/// Map an already-read table onto records.
pub fn records_from_table(
    table: &SourceTable,
    path: &Path,
    options: &IngestOptions,
) -> Result<Vec<Record>> {
    let columns = &options.columns;
    let missing: Vec<String> = columns
        .all()
        .iter()
        .filter(|name| table.column_index(name).is_none())
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            columns: missing,
            path: path.to_path_buf(),
        });
    }
    let index = |name: &str| table.column_index(name).unwrap_or_default();
    let priority_idx = index(&columns.priority);
    let name_idx = index(&columns.name);
    let postal_idx = index(&columns.postal_code);
    let address_idx = index(&columns.address);
    let prefecture_idx = index(&columns.prefecture);

    let take = options.limit.unwrap_or(table.rows.len());
    let mut records = Vec::with_capacity(take.min(table.rows.len()));
    for (row, values) in table.rows.iter().take(take).enumerate() {
        let priority = non_empty(&values[priority_idx]).and_then(|raw| {
            let parsed = parse_priority(&raw);
            if parsed.is_none() {
                warn!(row, value = %raw, "unparseable priority, treating as absent");
            }
            parsed
        });
        records.push(Record {
            row,
            name: non_empty(&values[name_idx]),
            postal_code: non_empty(&values[postal_idx]),
            address: non_empty(&values[address_idx]),
            prefecture: non_empty(&values[prefecture_idx]),
            priority,
        });
    }
    if let Some(limit) = options.limit {
        debug!(limit, loaded = records.len(), "record limit applied");
    }
    Ok(records)
}

/// The raw value, or `None` when the cell is blank.
fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse a priority ordinal; spreadsheet exports often write `1` as `1.0`.
pub fn parse_priority(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return Some(value);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Some(value as u32)
    } else {
        None
    }
}
