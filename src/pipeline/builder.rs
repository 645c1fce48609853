//! Main quality pipeline.
//!
//! This module provides the core `Pipeline` struct and builder for
//! orchestrating the normalize → flag → analyze sequence over one table.

use crate::cleaner::{normalize_columns, NullFlagger};
use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result, ResultExt};
use crate::quality::QualityAnalyzer;
use crate::reporting::ReportRenderer;
use crate::types::PipelineResult;
use polars::prelude::*;
use tracing::{debug, error, info};

/// The main data-quality pipeline.
///
/// Use [`Pipeline::builder()`] to create a new pipeline with custom
/// configuration.
///
/// # Example
///
/// ```rust,ignore
/// use nullgate::{Pipeline, PipelineConfig};
///
/// let pipeline = Pipeline::builder()
///     .config(PipelineConfig::builder().null_threshold(0.1).build()?)
///     .build()?;
///
/// let result = pipeline.process(&df)?;
/// if !result.report.is_clean() {
///     // caller decides: abort, warn, or proceed
/// }
/// ```
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
}

// Ensure Pipeline can be moved to a worker thread by callers.
static_assertions::assert_impl_all!(Pipeline: Send);

impl Pipeline {
    /// Create a new pipeline builder.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Run the full quality sequence over a copy of `source` and return the
    /// augmented table with its report.
    ///
    /// The caller's DataFrame is never mutated. Stages run in fixed order
    /// with no early exit: normalize column names, derive one `_nan` flag
    /// per original column, analyze the flags against the configured
    /// threshold. The text report is rendered to stdout unless
    /// `print_report` is disabled.
    ///
    /// Feeding the *returned* table back into `process` is not meaningful:
    /// the flag columns would themselves be flagged. Run each source table
    /// through exactly once.
    pub fn process(&self, source: &DataFrame) -> Result<PipelineResult> {
        match self.process_internal(source) {
            Ok(result) => Ok(result),
            Err(e) => {
                error!("Pipeline error: {}", e);
                Err(e)
            }
        }
    }

    fn process_internal(&self, source: &DataFrame) -> Result<PipelineResult> {
        let mut df = source.clone();
        let height = df.height();
        info!("Starting quality pipeline: {:?}", df.shape());

        // Capture the original-to-canonical bindings once, up front; flags
        // and the report both derive from this snapshot.
        let bindings =
            normalize_columns(&mut df).context("while normalizing column names")?;

        NullFlagger::add_null_flags(&mut df, &bindings)
            .context("while deriving null flags")?;

        if df.height() != height {
            return Err(PipelineError::RowCountChanged {
                before: height,
                after: df.height(),
            });
        }

        let report = QualityAnalyzer::analyze(&df, self.config.null_threshold)
            .context("while analyzing null rates")?;

        if self.config.print_report {
            ReportRenderer::print(&report);
        }

        debug!(
            "Pipeline finished: {} flag columns, {} over threshold",
            report.columns.len(),
            report.over_threshold_columns().len()
        );

        Ok(PipelineResult { df, report })
    }
}

/// Builder for [`Pipeline`].
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    config: Option<PipelineConfig>,
}

impl PipelineBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the pipeline, validating the configuration.
    pub fn build(self) -> Result<Pipeline> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        Ok(Pipeline { config })
    }
}
