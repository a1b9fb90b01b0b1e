//! Data-quality report generation.
//!
//! Aggregates a cleaned batch into counts and rates and renders them as a
//! plain-text report for the person preparing the mailing.

mod quality;

pub use quality::{PriorityCount, QualityReport, REPORT_TITLE, TIMESTAMP_FORMAT, write_report};
