use serde::{Deserialize, Serialize};

/// One contact row as loaded from the sales list.
///
/// Every field except the row position is an optional string from the load
/// boundary onward, so numeric-looking postal codes are never coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Zero-based data row position; the record identity.
    pub row: usize,
    pub name: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub prefecture: Option<String>,
    pub priority: Option<u32>,
}

impl Record {
    pub fn new(row: usize) -> Self {
        Self {
            row,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_prefecture(mut self, prefecture: impl Into<String>) -> Self {
        self.prefecture = Some(prefecture.into());
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// A record after the cleaning passes, in the same position as its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub source: Record,
    /// `DDD-DDDD`, or `None` when the raw value was empty or malformed.
    pub postal_code: Option<String>,
    pub address: String,
    /// Display name with honorific; empty when the source name was missing.
    pub name: String,
    pub is_foreign: bool,
    pub is_duplicate_address: bool,
}

impl CleanedRecord {
    pub fn row(&self) -> usize {
        self.source.row
    }

    pub fn priority(&self) -> Option<u32> {
        self.source.priority
    }

    /// Whether the record can be printed: postal code present, address
    /// non-empty, and not classified foreign.
    ///
    /// Label layout, mail-merge export and the quality report all filter on
    /// this predicate and must agree.
    pub fn is_eligible(&self) -> bool {
        self.postal_code.is_some() && !self.address.is_empty() && !self.is_foreign
    }
}
