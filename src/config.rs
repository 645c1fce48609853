//! Configuration types for the data-quality pipeline.
//!
//! This module provides configuration options using the builder pattern
//! for flexible and ergonomic pipeline setup.

use serde::{Deserialize, Serialize};

/// Configuration for the quality pipeline.
///
/// Use [`PipelineConfig::builder()`] to create a new configuration with a
/// fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use nullgate::config::PipelineConfig;
///
/// let config = PipelineConfig::builder()
///     .null_threshold(0.1)
///     .print_report(false)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum tolerated fraction of null values per column (0.0 - 1.0)
    /// before a column is classified as over threshold.
    /// Default: 0.05 (5%)
    pub null_threshold: f64,

    /// Whether `process` renders the text report to stdout.
    /// Disable for library embedding or machine-readable output.
    /// Default: true
    pub print_report: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            null_threshold: 0.05,
            print_report: true,
        }
    }
}

impl PipelineConfig {
    /// Create a new configuration builder.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&self.null_threshold) {
            return Err(ConfigValidationError::InvalidThreshold {
                field: "null_threshold".to_string(),
                value: self.null_threshold,
            });
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid threshold for '{field}': {value} (must be between 0.0 and 1.0)")]
    InvalidThreshold { field: String, value: f64 },
}

impl From<ConfigValidationError> for crate::error::PipelineError {
    fn from(e: ConfigValidationError) -> Self {
        crate::error::PipelineError::InvalidConfig(e.to_string())
    }
}

/// Builder for [`PipelineConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    null_threshold: Option<f64>,
    print_report: Option<bool>,
}

impl PipelineConfigBuilder {
    /// Set the maximum tolerated null fraction per column.
    ///
    /// # Arguments
    /// * `threshold` - Value between 0.0 and 1.0 (e.g., 0.05 = 5%)
    pub fn null_threshold(mut self, threshold: f64) -> Self {
        self.null_threshold = Some(threshold);
        self
    }

    /// Enable or disable rendering the text report to stdout.
    pub fn print_report(mut self, print: bool) -> Self {
        self.print_report = Some(print);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `PipelineConfig` or an error if validation fails.
    pub fn build(self) -> Result<PipelineConfig, ConfigValidationError> {
        let config = PipelineConfig {
            null_threshold: self.null_threshold.unwrap_or(0.05),
            print_report: self.print_report.unwrap_or(true),
        };

        config.validate()?;
        Ok(config)
    }
}
