//! Error types for contact list ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a contact list.
///
/// All of these are structural: they abort the run before any record is
/// cleaned.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input workbook or directory does not contain the requested sheet.
    #[error("sheet '{sheet}' not found in {path}")]
    SheetNotFound { sheet: String, path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Decoding Errors ===
    /// File uses an encoding the loader does not read.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File is neither valid UTF-8 nor valid Shift_JIS.
    #[error("could not decode {path} as UTF-8 or Shift_JIS")]
    Undecodable { path: PathBuf },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Workbook Errors ===
    /// Workbook could not be opened or the sheet could not be read.
    #[error("failed to read workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Source has no non-blank rows.
    #[error("contact list is empty: {path}")]
    EmptySource { path: PathBuf },

    // === Schema Errors ===
    /// One or more required columns are absent from the header row.
    #[error("required columns not found in {path}: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String>, path: PathBuf },
}

impl IngestError {
    pub(crate) fn open(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
