//! Contract traits for model implementations
//!
//! - [`Predictor`]: fit-then-predict contract used when producing artifacts
//! - [`ConfidenceForecaster`]: Shape A call convention
//! - [`IndexPredictor`]: Shape B call convention
//! - [`ForecastModel`]: capability probe over a loaded artifact

mod capability;
mod predictor;

pub use capability::{ConfidenceForecaster, ForecastModel, IndexPredictor};
pub use predictor::Predictor;
