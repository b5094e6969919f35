//! Capability traits for loaded model artifacts
//!
//! Two incompatible call conventions exist among exported models. A model
//! advertises the one it supports through [`ForecastModel`]; consumers probe
//! the capabilities instead of matching on concrete types.

use std::fmt::Debug;

use crate::error::Result;
use crate::model::ForecastWithConfidence;

/// Shape A: forward-looking forecast for a number of steps
pub trait ConfidenceForecaster: Send + Sync {
    /// Forecast the `steps` periods following the training data
    ///
    /// The point forecast is in [`ForecastWithConfidence::forecast`];
    /// the band is computed at the model's default confidence level.
    fn get_forecast(&self, steps: usize) -> Result<ForecastWithConfidence>;
}

/// Shape B: predictions addressed by absolute observation index
pub trait IndexPredictor: Send + Sync {
    /// Number of observations the model was trained on, if recorded
    fn training_len(&self) -> Option<usize>;

    /// Predict observations `start..=end`
    ///
    /// Indices below [`training_len`](Self::training_len) are in-sample
    /// predictions; indices at or beyond it are out-of-sample forecasts.
    fn predict_range(&self, start: usize, end: usize) -> Result<Vec<f64>>;
}

/// A deserialized forecasting model
///
/// Both capability accessors default to `None`; an implementation overrides
/// the one it supports. A model that overrides neither cannot be served.
pub trait ForecastModel: Debug + Send + Sync {
    /// Short identifier of the model family, used in logs and errors
    fn kind(&self) -> &str;

    /// Shape A capability, if supported
    fn as_confidence_forecaster(&self) -> Option<&dyn ConfidenceForecaster> {
        None
    }

    /// Shape B capability, if supported
    fn as_index_predictor(&self) -> Option<&dyn IndexPredictor> {
        None
    }
}
