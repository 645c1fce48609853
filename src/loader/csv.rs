//! CSV table source.

use crate::error::Result;
use crate::loader::{ensure_file, TableSource};
use polars::io::csv::read::{CsvReadOptions, NullValues};
use polars::prelude::*;
use std::path::PathBuf;
use tracing::debug;

/// Cell tokens parsed as missing values, in addition to absent fields.
pub const MISSING_TOKENS: [&str; 3] = ["", "NaN", "null"];

/// Loads a comma-delimited file with a header row.
#[derive(Debug)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    /// Create a new CSV source for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableSource for CsvSource {
    fn load(&self) -> Result<DataFrame> {
        ensure_file(&self.path, "csv")?;

        let null_values =
            NullValues::AllColumns(MISSING_TOKENS.iter().map(|t| (*t).into()).collect());

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .with_parse_options(
                CsvParseOptions::default().with_null_values(Some(null_values)),
            )
            .try_into_reader_with_file_path(Some(self.path.clone()))?
            .finish()?;

        debug!("Loaded CSV {}: {:?}", self.path.display(), df.shape());
        Ok(df)
    }
}
