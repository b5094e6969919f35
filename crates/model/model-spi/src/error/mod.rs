//! Error types for model operations
//!
//! This module provides the [`ModelError`] enum and [`Result`] type alias
//! shared by every model implementation.

mod model_error;

pub use model_error::{ModelError, Result};
