//! Pipeline module.
//!
//! This module provides the main quality pipeline and its builder.

mod builder;

pub use builder::{Pipeline, PipelineBuilder};
