//! Data-quality analysis over derived flag columns.

mod analyzer;

pub use analyzer::QualityAnalyzer;
