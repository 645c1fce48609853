//! Null indicator columns.

use crate::error::{PipelineError, Result};
use crate::types::ColumnBinding;
use polars::prelude::*;
use tracing::debug;

/// Suffix appended to a canonical column name to form its flag column.
pub const FLAG_SUFFIX: &str = "_nan";

/// Derives per-column null indicator columns.
pub struct NullFlagger;

impl NullFlagger {
    /// Append one `<current_name>_nan` column per binding, holding `1` where
    /// the bound column is null and `0` otherwise.
    ///
    /// Columns are resolved by index, not by name, since normalization may
    /// have rewritten the names the bindings were captured from. Flags are
    /// appended in binding order; existing columns and row order are
    /// untouched.
    ///
    /// A binding pointing past the table width (or more bindings than
    /// columns) is a broken caller contract and fails fast, as does a flag
    /// name that would shadow an existing column.
    pub fn add_null_flags(df: &mut DataFrame, bindings: &[ColumnBinding]) -> Result<()> {
        let width = df.width();
        if bindings.len() > width {
            return Err(PipelineError::BindingCountMismatch {
                bindings: bindings.len(),
                width,
            });
        }

        for binding in bindings {
            if binding.index >= width {
                return Err(PipelineError::BindingOutOfRange {
                    index: binding.index,
                    width,
                });
            }

            let column = &df.get_columns()[binding.index];
            let flag_name = format!("{}{}", column.name(), FLAG_SUFFIX);
            if df.get_column_names().iter().any(|n| n.as_str() == flag_name) {
                return Err(PipelineError::DuplicateColumnName {
                    name: flag_name,
                    first: column.name().to_string(),
                    second: binding.original.clone(),
                });
            }

            let mask = column.as_materialized_series().is_null();
            let mut flags = mask.cast(&DataType::UInt32)?;
            flags.rename(flag_name.into());
            df.with_column(flags)?;
        }

        debug!("Appended {} null flag columns", bindings.len());
        Ok(())
    }
}
