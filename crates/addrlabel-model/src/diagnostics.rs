use std::fmt;

use serde::{Deserialize, Serialize};

/// Cleansing condition tallied across a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MissingPostalCode,
    ForeignAddress,
    DuplicateAddress,
}

impl DiagnosticKind {
    /// Label used in the quality report.
    pub fn label(self) -> &'static str {
        match self {
            DiagnosticKind::MissingPostalCode => "郵便番号欠損",
            DiagnosticKind::ForeignAddress => "国外住所検出",
            DiagnosticKind::DuplicateAddress => "重複住所検出",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            DiagnosticKind::MissingPostalCode => "missing_postal_code",
            DiagnosticKind::ForeignAddress => "foreign_address",
            DiagnosticKind::DuplicateAddress => "duplicate_address",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single tally entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub count: usize,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}件", self.kind.label(), self.count)
    }
}

/// Diagnostics accumulated by one cleaning run, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tally. Zero counts are not recorded.
    pub fn record(&mut self, kind: DiagnosticKind, count: usize) {
        if count > 0 {
            self.entries.push(Diagnostic { kind, count });
        }
    }

    /// Total count for `kind`, zero when nothing was recorded.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.count)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
