//! Column cleaning module.
//!
//! This module provides functionality for:
//! - Normalizing raw column names to canonical snake_case identifiers
//! - Deriving per-column null indicator ("flag") columns

mod flags;
mod names;

pub use flags::{NullFlagger, FLAG_SUFFIX};
pub use names::{normalize_columns, normalize_name};
