//! Table sources.
//!
//! Loading is a collaborator of the pipeline, not part of it: anything that
//! can produce a rectangular [`DataFrame`] of named, nullable columns can
//! feed [`crate::Pipeline::process`]. Each format gets its own independent
//! [`TableSource`] implementation; there is no shared loader state.

mod csv;
mod json;

pub use csv::{CsvSource, MISSING_TOKENS};
pub use json::JsonSource;

use crate::error::{PipelineError, Result};
use polars::prelude::DataFrame;
use std::path::{Path, PathBuf};

/// Common trait for tabular file sources.
pub trait TableSource: std::fmt::Debug {
    /// Load the file into a DataFrame.
    ///
    /// Fails before parsing when the file is missing or has the wrong
    /// extension; parse failures surface as wrapped polars errors.
    fn load(&self) -> Result<DataFrame>;
}

/// Create a source for the given file path, dispatching on its extension.
pub fn source_for_path(path: &Path) -> Result<Box<dyn TableSource>> {
    match extension_of(path).as_str() {
        "csv" => Ok(Box::new(CsvSource::new(path))),
        "json" => Ok(Box::new(JsonSource::new(path))),
        _ => Err(PipelineError::UnsupportedExtension {
            path: path.to_path_buf(),
            expected: "csv or json".to_string(),
        }),
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Validate that `path` exists and carries the expected extension.
pub(crate) fn ensure_file(path: &Path, expected: &str) -> Result<()> {
    if !path.exists() {
        return Err(PipelineError::FileNotFound(path.to_path_buf()));
    }
    if extension_of(path) != expected {
        return Err(PipelineError::UnsupportedExtension {
            path: path.to_path_buf(),
            expected: expected.to_string(),
        });
    }
    Ok(())
}

/// Convenience wrapper: pick a source for `path` and load it.
pub fn load_table(path: impl Into<PathBuf>) -> Result<DataFrame> {
    let path = path.into();
    source_for_path(&path)?.load()
}
