//! Shared data types for the quality pipeline.

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

/// Correspondence between one original column and its current position.
///
/// Captured once per `process` invocation, before any renaming, and never
/// mutated afterwards. The `index` stays valid across normalization (which
/// renames in place) and flagging (which only appends).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBinding {
    /// Column name as it appeared in the source table.
    pub original: String,
    /// Canonical name after normalization.
    pub canonical: String,
    /// Position of the column in the table.
    pub index: usize,
}

/// Null-rate statistics for one flag column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagColumnStat {
    /// Name of the flag column (`<canonical>_nan`).
    pub column: String,
    /// Percentage of null rows in the source column, 0.0 - 100.0.
    pub null_percentage: f64,
    /// Whether the null rate strictly exceeds the configured threshold.
    pub over_threshold: bool,
}

/// Structured data-quality report.
///
/// Carries both the raw percentages and the per-column classification so the
/// caller decides whether an over-threshold column aborts downstream use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    /// Timestamp when the report was generated (RFC 3339).
    pub generated_at: String,
    /// Threshold the columns were classified against, as a fraction.
    pub threshold: f64,
    /// Per-flag-column statistics, in table column order.
    pub columns: Vec<FlagColumnStat>,
}

impl QualityReport {
    /// Names of the columns whose null rate exceeds the threshold.
    pub fn over_threshold_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.over_threshold)
            .map(|c| c.column.as_str())
            .collect()
    }

    /// True when every column is within the threshold.
    pub fn is_clean(&self) -> bool {
        self.columns.iter().all(|c| !c.over_threshold)
    }

    /// Null percentage for a flag column, if present in the report.
    pub fn percentage(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.null_percentage)
    }
}

/// Result of a pipeline run: the augmented table and its quality report.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// The processed table: normalized names plus one `_nan` flag column per
    /// original column.
    pub df: DataFrame,
    /// The quality report computed over the flag columns.
    pub report: QualityReport,
}
