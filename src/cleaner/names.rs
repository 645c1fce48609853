//! Column name normalization.

use crate::error::{PipelineError, Result};
use crate::types::ColumnBinding;
use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

static NON_CANONICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9_ ]").unwrap());
static UNDERSCORE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"_{2,}").unwrap());

/// Normalize a raw column name to its canonical form: lowercase, restricted
/// to `[a-z0-9_]`, spaces turned into underscores, no duplicate or
/// leading/trailing underscores.
///
/// The steps are applied in this exact order; lowercasing first means
/// uppercase letters survive as their lowercase forms rather than being
/// stripped. Total over any input; the empty string maps to itself.
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(normalize_name("Nombre Cliente (RAW)"), "nombre_cliente_raw");
/// assert_eq!(normalize_name("Monto $$"), "monto");
/// ```
pub fn normalize_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped = NON_CANONICAL.replace_all(&lowered, "");
    let underscored = stripped.replace(' ', "_");
    let collapsed = UNDERSCORE_RUNS.replace_all(&underscored, "_");
    collapsed.trim_matches('_').to_string()
}

/// Normalize every column name of `df` in place, preserving column order and
/// count, and return the original-to-canonical bindings.
///
/// Two raw names that normalize to the same canonical name would leave the
/// table with duplicate columns and ambiguous lookups, so collisions fail
/// fast with [`PipelineError::DuplicateColumnName`] before any rename is
/// applied.
pub fn normalize_columns(df: &mut DataFrame) -> Result<Vec<ColumnBinding>> {
    let raw_names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    let mut bindings = Vec::with_capacity(raw_names.len());
    let mut seen: HashMap<String, String> = HashMap::with_capacity(raw_names.len());

    for (index, raw) in raw_names.iter().enumerate() {
        let canonical = normalize_name(raw);
        if let Some(first) = seen.get(&canonical) {
            return Err(PipelineError::DuplicateColumnName {
                name: canonical,
                first: first.clone(),
                second: raw.clone(),
            });
        }
        seen.insert(canonical.clone(), raw.clone());
        bindings.push(ColumnBinding {
            original: raw.clone(),
            canonical,
            index,
        });
    }

    df.set_column_names(bindings.iter().map(|b| b.canonical.as_str()))?;

    let renamed = bindings
        .iter()
        .filter(|b| b.original != b.canonical)
        .count();
    debug!("Normalized {} column names ({} changed)", bindings.len(), renamed);

    Ok(bindings)
}
