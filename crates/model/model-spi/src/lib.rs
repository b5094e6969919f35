//! Model Service Provider Interface
//!
//! Defines the contracts a previously-fitted forecasting model can satisfy.
//!
//! A serialized model exposes exactly one of two call conventions:
//!
//! - [`ConfidenceForecaster`] ("Shape A"): forward-looking forecast for a step count,
//!   returned together with a confidence band
//! - [`IndexPredictor`] ("Shape B"): predictions addressed by absolute observation index
//!
//! [`ForecastModel`] is the object-safe entry point used by consumers to probe
//! which convention a model supports, and [`ModelShape`] is the result of that probe.
//!
//! The fit side ([`Predictor`]) is kept for the producers of model artifacts.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{ConfidenceForecaster, ForecastModel, IndexPredictor, Predictor};
pub use error::{ModelError, Result};
pub use model::{ForecastWithConfidence, ModelShape};
