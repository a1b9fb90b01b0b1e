pub mod diagnostics;
pub mod label;
pub mod options;
pub mod record;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use label::{LabelCell, PlacedLine, Placement, Point};
pub use options::{CleanOptions, LabelMetrics, LabelSheet, POINTS_PER_MM};
pub use record::{CleanedRecord, Record};
