//! Mail-merge CSV export.
//!
//! The file carries one row per printable record with the columns
//! `郵便番号,住所,氏名`. Word processors in the target locale expect
//! Shift_JIS; when a value cannot be represented there the whole file falls
//! back to UTF-8 with a byte-order mark.

use std::path::{Path, PathBuf};

use encoding_rs::SHIFT_JIS;
use serde::Serialize;
use tracing::{debug, info, warn};

use addrlabel_model::CleanedRecord;

use crate::common::write_file;
use crate::error::Result;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encoding a mail-merge file was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvEncoding {
    ShiftJis,
    Utf8Bom,
}

impl CsvEncoding {
    pub fn as_str(self) -> &'static str {
        match self {
            CsvEncoding::ShiftJis => "Shift_JIS",
            CsvEncoding::Utf8Bom => "UTF-8 (BOM)",
        }
    }
}

impl std::fmt::Display for CsvEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of writing a mail-merge file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMergeOutcome {
    pub path: PathBuf,
    pub rows: usize,
    pub encoding: CsvEncoding,
}

#[derive(Debug, Serialize)]
struct MailMergeRow<'a> {
    #[serde(rename = "郵便番号")]
    postal_code: &'a str,
    #[serde(rename = "住所")]
    address: &'a str,
    #[serde(rename = "氏名")]
    name: &'a str,
}

impl<'a> MailMergeRow<'a> {
    fn from_record(record: &'a CleanedRecord) -> Option<Self> {
        if !record.is_eligible() {
            return None;
        }
        Some(Self {
            postal_code: record.postal_code.as_deref()?,
            address: &record.address,
            name: &record.name,
        })
    }
}

/// Render the mail-merge CSV as text. Only eligible records are written, in
/// input order. The header row is written even when no record qualifies.
pub fn render_mail_merge_csv(records: &[CleanedRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut buffer);
        writer.write_record(["郵便番号", "住所", "氏名"])?;
        for row in records.iter().filter_map(MailMergeRow::from_record) {
            writer.serialize(row)?;
        }
        writer.flush().map_err(csv::Error::from)?;
    }
    // Every field came from a `&str`.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Encode rendered CSV text, preferring Shift_JIS.
pub fn encode_mail_merge(text: &str) -> (Vec<u8>, CsvEncoding) {
    let (encoded, _, had_errors) = SHIFT_JIS.encode(text);
    if !had_errors {
        return (encoded.into_owned(), CsvEncoding::ShiftJis);
    }
    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + text.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(text.as_bytes());
    (bytes, CsvEncoding::Utf8Bom)
}

/// Write the mail-merge CSV to `path`.
pub fn write_mail_merge_csv(records: &[CleanedRecord], path: &Path) -> Result<MailMergeOutcome> {
    let text = render_mail_merge_csv(records)?;
    let rows = records.iter().filter(|record| record.is_eligible()).count();
    let (bytes, encoding) = encode_mail_merge(&text);
    if encoding == CsvEncoding::Utf8Bom {
        warn!(
            path = %path.display(),
            "characters not representable in Shift_JIS, writing UTF-8 with BOM"
        );
    }
    write_file(path, &bytes)?;
    debug!(bytes = bytes.len(), "mail-merge file encoded");
    info!(path = %path.display(), rows, encoding = %encoding, "wrote mail-merge CSV");
    Ok(MailMergeOutcome {
        path: path.to_path_buf(),
        rows,
        encoding,
    })
}
