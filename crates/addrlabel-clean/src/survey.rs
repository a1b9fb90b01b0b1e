//! Missing-field survey over raw records.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use addrlabel_model::Record;

/// Row indices shown in a log line before the remainder is summarized.
const ROWS_SHOWN: usize = 10;

/// Raw field checked by the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyField {
    Name,
    PostalCode,
    Address,
    Prefecture,
}

impl SurveyField {
    pub const ALL: [SurveyField; 4] = [
        SurveyField::Name,
        SurveyField::PostalCode,
        SurveyField::Address,
        SurveyField::Prefecture,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SurveyField::Name => "氏名",
            SurveyField::PostalCode => "郵便番号",
            SurveyField::Address => "住所",
            SurveyField::Prefecture => "都道府県",
        }
    }

    fn value(self, record: &Record) -> Option<&str> {
        match self {
            SurveyField::Name => record.name.as_deref(),
            SurveyField::PostalCode => record.postal_code.as_deref(),
            SurveyField::Address => record.address.as_deref(),
            SurveyField::Prefecture => record.prefecture.as_deref(),
        }
    }
}

/// Rows with an absent or blank value for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingField {
    pub field: SurveyField,
    pub count: usize,
    pub percentage: f64,
    pub rows: Vec<usize>,
}

impl MissingField {
    /// Row list for logs: the first ten rows, then a remainder count.
    pub fn rows_preview(&self) -> String {
        let shown: Vec<String> = self
            .rows
            .iter()
            .take(ROWS_SHOWN)
            .map(ToString::to_string)
            .collect();
        let mut preview = format!("[{}]", shown.join(", "));
        if self.rows.len() > ROWS_SHOWN {
            preview.push_str(&format!(" (+{} more)", self.rows.len() - ROWS_SHOWN));
        }
        preview
    }
}

/// Survey the raw records for missing values. Fields with no gaps are omitted.
pub fn survey_missing_fields(records: &[Record]) -> Vec<MissingField> {
    let total = records.len();
    SurveyField::ALL
        .iter()
        .filter_map(|&field| {
            let rows: Vec<usize> = records
                .iter()
                .filter(|record| field.value(record).is_none_or(|value| value.trim().is_empty()))
                .map(|record| record.row)
                .collect();
            if rows.is_empty() {
                return None;
            }
            let count = rows.len();
            Some(MissingField {
                field,
                count,
                percentage: count as f64 / total as f64 * 100.0,
                rows,
            })
        })
        .collect()
}

/// Log a survey: one warning per field with gaps.
pub fn log_missing_fields(survey: &[MissingField]) {
    if survey.is_empty() {
        info!("no missing values detected");
        return;
    }
    for entry in survey {
        warn!(
            field = entry.field.label(),
            count = entry.count,
            percentage = %format!("{:.1}", entry.percentage),
            rows = %entry.rows_preview(),
            "missing values"
        );
    }
}
