//! Custom error types for the data-quality pipeline.
//!
//! This module provides the error hierarchy using `thiserror`. Load failures
//! and contract violations are deterministic, data-dependent failures:
//! they propagate immediately to the caller with no retry and no partial
//! results.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the quality pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Source file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Source file has an extension no loader handles.
    #[error("Unsupported file extension for '{}' (expected {})", .path.display(), .expected)]
    UnsupportedExtension { path: PathBuf, expected: String },

    /// Two raw column names normalized to the same canonical name.
    #[error(
        "Duplicate canonical column name '{name}' produced by '{first}' and '{second}'"
    )]
    DuplicateColumnName {
        name: String,
        first: String,
        second: String,
    },

    /// A column binding points past the end of the table.
    #[error("Column binding index {index} out of range for table with {width} columns")]
    BindingOutOfRange { index: usize, width: usize },

    /// More column bindings than the table has columns.
    #[error("{bindings} column bindings for a table with {width} columns")]
    BindingCountMismatch { bindings: usize, width: usize },

    /// A stage changed the table's row count.
    #[error("Row count changed during processing: {before} rows before, {after} after")]
    RowCountChanged { before: usize, after: usize },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<PipelineError>,
    },
}

impl PipelineError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        PipelineError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Check if this error is a broken internal invariant rather than bad
    /// input. Contract violations indicate a programming error at the call
    /// site and are never worth retrying.
    pub fn is_contract_violation(&self) -> bool {
        match self {
            Self::DuplicateColumnName { .. }
            | Self::BindingOutOfRange { .. }
            | Self::BindingCountMismatch { .. }
            | Self::RowCountChanged { .. } => true,
            Self::WithContext { source, .. } => source.is_contract_violation(),
            _ => false,
        }
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PipelineError::Polars(e).with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_contract_violation() {
        assert!(PipelineError::BindingOutOfRange { index: 5, width: 3 }.is_contract_violation());
        assert!(PipelineError::RowCountChanged { before: 3, after: 2 }.is_contract_violation());
        assert!(!PipelineError::FileNotFound(PathBuf::from("x.csv")).is_contract_violation());
    }

    #[test]
    fn test_with_context() {
        let error = PipelineError::BindingOutOfRange { index: 5, width: 3 }
            .with_context("while deriving null flags");
        assert!(error.to_string().contains("while deriving null flags"));
        assert!(error.is_contract_violation()); // preserved through context
    }

    #[test]
    fn test_duplicate_column_message_names_both_sources() {
        let error = PipelineError::DuplicateColumnName {
            name: "monto".to_string(),
            first: "Monto $$".to_string(),
            second: "monto".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("monto"));
        assert!(message.contains("Monto $$"));
    }
}
