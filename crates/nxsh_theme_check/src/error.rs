//! Error types for theme checking.
//!
//! Per-theme problems (bad fields, malformed JSON) are not errors at this
//! level; they end up as messages in a [`crate::ValidationResult`]. The
//! variants here are the failures surfaced to callers.

use std::io;
use std::path::PathBuf;

/// Result type for theme checking operations
pub type ThemeCheckResult<T> = Result<T, ThemeCheckError>;

#[derive(Debug, thiserror::Error)]
pub enum ThemeCheckError {
    #[error("themes directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("file read error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON parse error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown export format '{0}' (expected md, csv or json)")]
    UnknownExportFormat(String),

    #[error("report export failed: {0}")]
    Export(#[from] serde_json::Error),
}

impl ThemeCheckError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
