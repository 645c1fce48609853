//! JSON table source.

use crate::error::Result;
use crate::loader::{ensure_file, TableSource};
use polars::prelude::*;
use std::fs::File;
use std::path::PathBuf;
use tracing::debug;

/// Loads a JSON file holding an array of flat records.
#[derive(Debug)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    /// Create a new JSON source for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableSource for JsonSource {
    fn load(&self) -> Result<DataFrame> {
        ensure_file(&self.path, "json")?;

        let file = File::open(&self.path)?;
        let df = JsonReader::new(file)
            .with_json_format(JsonFormat::Json)
            .finish()?;

        debug!("Loaded JSON {}: {:?}", self.path.display(), df.shape());
        Ok(df)
    }
}
