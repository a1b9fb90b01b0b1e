//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to build SVG for page {page}: {message}")]
    Svg { page: usize, message: String },

    #[error("failed to serialize layout: {0}")]
    Json(#[from] serde_json::Error),
}

impl OutputError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, OutputError>;
