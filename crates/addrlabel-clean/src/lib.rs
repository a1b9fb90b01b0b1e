//! Contact record cleaning.
//!
//! This crate turns raw [`Record`]s into [`CleanedRecord`]s:
//!
//! - **normalization**: postal code, address, and display name normalization
//! - **classification**: foreign-address heuristic and duplicate-address grouping
//! - **pipeline**: ordered passes with diagnostic tallies
//! - **survey**: per-field missing-value survey of the raw input
//!
//! [`Record`]: addrlabel_model::Record
//! [`CleanedRecord`]: addrlabel_model::CleanedRecord

pub mod classification;
pub mod normalization;
pub mod pipeline;
pub mod survey;

pub use classification::{
    FOREIGN_LATIN_RATIO, detect_duplicate_addresses, is_foreign_address, latin_ratio,
};
pub use normalization::{format_name, normalize_address, normalize_postal_code};
pub use pipeline::{CleaningOutcome, RecordCleaner, clean_records};
pub use survey::{MissingField, SurveyField, log_missing_fields, survey_missing_fields};
