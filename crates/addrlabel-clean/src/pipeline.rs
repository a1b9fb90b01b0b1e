//! Record cleaning pipeline.
//!
//! Runs the normalization and classification passes over a batch of records
//! in a fixed order:
//!
//! 1. postal code normalization
//! 2. address normalization (each record's own prefecture)
//! 3. display name formatting
//! 4. foreign-address classification
//! 5. duplicate-address detection
//!
//! Steps 4 and 5 read the normalized address from step 2, never the raw one.
//! No step fails on a malformed record: bad values degrade to an empty or
//! absent field and a diagnostic tally.

use tracing::{debug, info, trace, warn};

use addrlabel_model::{CleanOptions, CleanedRecord, DiagnosticKind, Diagnostics, Record};

use crate::classification::{detect_duplicate_addresses, is_foreign_address};
use crate::normalization::{format_name, normalize_address, normalize_postal_code};

/// Cleaned records plus the diagnostics of one run.
#[derive(Debug, Clone, Default)]
pub struct CleaningOutcome {
    /// One entry per input record, in input order.
    pub records: Vec<CleanedRecord>,
    pub diagnostics: Diagnostics,
}

impl CleaningOutcome {
    pub fn eligible(&self) -> impl Iterator<Item = &CleanedRecord> {
        self.records.iter().filter(|record| record.is_eligible())
    }

    pub fn eligible_count(&self) -> usize {
        self.eligible().count()
    }
}

/// Runs the cleaning passes with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct RecordCleaner {
    options: CleanOptions,
}

impl RecordCleaner {
    pub fn new(options: CleanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CleanOptions {
        &self.options
    }

    /// Clean `records`, consuming them.
    pub fn clean(&self, records: Vec<Record>) -> CleaningOutcome {
        let mut diagnostics = Diagnostics::new();

        let postal_codes: Vec<Option<String>> = records
            .iter()
            .map(|record| normalize_postal_code(record.postal_code.as_deref()))
            .collect();
        let missing_postal = postal_codes.iter().filter(|code| code.is_none()).count();
        if missing_postal > 0 {
            warn!(count = missing_postal, "postal codes missing or malformed");
        }
        diagnostics.record(DiagnosticKind::MissingPostalCode, missing_postal);

        let addresses: Vec<String> = records
            .iter()
            .map(|record| {
                normalize_address(record.address.as_deref(), record.prefecture.as_deref())
            })
            .collect();

        let names: Vec<String> = records
            .iter()
            .map(|record| format_name(record.name.as_deref(), &self.options.honorific))
            .collect();

        let foreign: Vec<bool> = addresses
            .iter()
            .map(|address| is_foreign_address(address))
            .collect();
        let foreign_count = foreign.iter().filter(|flag| **flag).count();
        if foreign_count > 0 {
            warn!(count = foreign_count, "foreign addresses detected");
        }
        diagnostics.record(DiagnosticKind::ForeignAddress, foreign_count);

        let duplicates = detect_duplicate_addresses(addresses.iter().map(String::as_str));
        if !duplicates.is_empty() {
            warn!(count = duplicates.len(), "duplicate addresses detected");
        }
        diagnostics.record(DiagnosticKind::DuplicateAddress, duplicates.len());

        let cleaned: Vec<CleanedRecord> = records
            .into_iter()
            .zip(postal_codes)
            .zip(addresses)
            .zip(names)
            .zip(foreign)
            .enumerate()
            .map(
                |(index, ((((source, postal_code), address), name), is_foreign))| {
                    let record = CleanedRecord {
                        is_duplicate_address: duplicates.contains(&index),
                        source,
                        postal_code,
                        address,
                        name,
                        is_foreign,
                    };
                    if !record.is_eligible() {
                        debug!(
                            row = record.row(),
                            has_postal_code = record.postal_code.is_some(),
                            has_address = !record.address.is_empty(),
                            is_foreign = record.is_foreign,
                            "record not printable"
                        );
                    }
                    trace!(row = record.row(), "record cleaned");
                    record
                },
            )
            .collect();

        let outcome = CleaningOutcome {
            records: cleaned,
            diagnostics,
        };
        info!(
            total = outcome.records.len(),
            eligible = outcome.eligible_count(),
            "cleaning complete"
        );
        outcome
    }
}

/// Clean `records` with default options.
pub fn clean_records(records: Vec<Record>) -> CleaningOutcome {
    RecordCleaner::default().clean(records)
}
