//! Raw CSV reading with encoding detection.

use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::SHIFT_JIS;

use crate::error::{IngestError, Result};
use crate::table::{SourceFormat, SourceTable};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Encoding a source file was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Utf8Bom,
    ShiftJis,
}

/// Decode file bytes as UTF-8 (with or without BOM), falling back to Shift_JIS.
pub fn decode_source(path: &Path, bytes: &[u8]) -> Result<(String, SourceEncoding)> {
    if bytes.len() >= 2 {
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return match std::str::from_utf8(rest) {
            Ok(text) => Ok((text.to_string(), SourceEncoding::Utf8Bom)),
            Err(_) => Err(IngestError::Undecodable {
                path: path.to_path_buf(),
            }),
        };
    }
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok((text.to_string(), SourceEncoding::Utf8));
    }
    let (text, had_errors) = SHIFT_JIS.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(IngestError::Undecodable {
            path: path.to_path_buf(),
        });
    }
    Ok((text.into_owned(), SourceEncoding::ShiftJis))
}

/// Read a CSV file into a table with every data cell kept verbatim.
pub fn read_csv_table(path: &Path) -> Result<SourceTable> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::open(path.to_path_buf(), e))?;
    let (text, encoding) = decode_source(path, &bytes)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        raw_rows.push(record.iter().map(str::to_string).collect());
    }
    SourceTable::from_raw_rows(path, raw_rows, SourceFormat::Csv(encoding))
}
