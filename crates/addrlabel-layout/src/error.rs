//! Error types for label layout configuration.

use thiserror::Error;

/// Invalid sheet or metrics configuration.
///
/// Content that does not fit a cell is never an error; it only degrades the
/// drawn output.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("label grid must have at least one column and one row (got {columns}x{rows})")]
    EmptyGrid { columns: usize, rows: usize },

    #[error("page size must be positive (got {width}x{height})")]
    InvalidPageSize { width: f64, height: f64 },

    #[error("address line width must be at least one character")]
    ZeroLineWidth,
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
