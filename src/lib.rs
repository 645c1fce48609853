//! Data-Quality Pipeline Library
//!
//! A small, single-pass data-quality pipeline built with Rust and Polars.
//!
//! # Overview
//!
//! Given a tabular dataset, the pipeline:
//!
//! - **Normalizes column names** to canonical snake_case identifiers
//! - **Flags missing values** with one 0/1 `_nan` indicator column per
//!   original column
//! - **Reports null rates** per column against a configurable threshold,
//!   as structured data the caller can escalate on
//!
//! File loading is a collaborator, not part of the core: the [`loader`]
//! module ships CSV and JSON [`loader::TableSource`] implementations, but
//! any rectangular [`polars::prelude::DataFrame`] works.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use nullgate::{loader, Pipeline, PipelineConfig};
//!
//! let df = loader::load_table("sales.csv")?;
//!
//! let result = Pipeline::builder()
//!     .config(PipelineConfig::builder().null_threshold(0.06).build()?)
//!     .build()?
//!     .process(&df)?;
//!
//! for column in result.report.over_threshold_columns() {
//!     eprintln!("too many nulls in {column}");
//! }
//! ```
//!
//! The caller's frame is never mutated; `process` works on a defensive copy
//! and returns it augmented with the flag columns.

pub mod cleaner;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod quality;
pub mod reporting;
pub mod types;

// Re-exports for convenient access
pub use cleaner::{normalize_name, NullFlagger, FLAG_SUFFIX};
pub use config::{ConfigValidationError, PipelineConfig, PipelineConfigBuilder};
pub use error::{PipelineError, ResultExt};
pub use loader::{load_table, source_for_path, CsvSource, JsonSource, TableSource};
pub use pipeline::{Pipeline, PipelineBuilder};
pub use quality::QualityAnalyzer;
pub use reporting::ReportRenderer;
pub use types::{ColumnBinding, FlagColumnStat, PipelineResult, QualityReport};
