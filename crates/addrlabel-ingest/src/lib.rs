//! Contact list ingestion.
//!
//! Reads the sales list, either a worksheet of an Excel workbook or a CSV
//! export, into an ordered sequence of [`Record`] values with
//! every field kept as an optional string, so postal codes such as
//! `0600001` never lose their leading zero.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use addrlabel_ingest::{IngestOptions, load_records};
//!
//! // Reads the 営業リスト worksheet
//! let records = load_records(Path::new("data/input/顧客.xlsx"), &IngestOptions::default())?;
//! ```
//!
//! [`Record`]: addrlabel_model::Record

mod csv_table;
mod error;
mod records;
mod table;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Source Reading ===
pub use csv_table::{SourceEncoding, decode_source, read_csv_table};
pub use table::{SourceFormat, SourceTable};
pub use workbook::{is_workbook, read_workbook_sheet};

// === Record Loading ===
pub use records::{
    ColumnNames, DEFAULT_SHEET, IngestOptions, load_records, parse_priority, records_from_table,
    resolve_source,
};
