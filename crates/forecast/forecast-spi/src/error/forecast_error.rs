//! Forecast error types

use model_spi::ModelError;
use thiserror::Error;

use crate::model::IndicatorKey;

/// Result type for forecast operations
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while loading models or generating forecasts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// No artifact exists at the resolved location
    #[error("Model artifact for {key} not found at {path}")]
    ArtifactNotFound { key: IndicatorKey, path: String },

    /// Artifact exists but could not be read or deserialized
    #[error("Model artifact for {key} at {path} is corrupt: {reason}")]
    ArtifactCorrupt {
        key: IndicatorKey,
        path: String,
        reason: String,
    },

    /// Model supports neither forecast-with-confidence nor index-based predict
    #[error("Model '{kind}' for {key} supports no known forecasting call convention")]
    UnsupportedModelShape { key: IndicatorKey, kind: String },

    /// Model returned a different number of values than requested
    #[error("Model for {key} returned {actual} values for a {expected}-month horizon")]
    ModelOutputLengthMismatch {
        key: IndicatorKey,
        expected: usize,
        actual: usize,
    },

    /// Horizon outside 1..=max
    #[error("Invalid horizon {horizon}: must be between 1 and {max} months")]
    InvalidHorizon { horizon: usize, max: usize },

    /// Key is not a member of the indicator catalog
    #[error("Unknown indicator: {0}")]
    UnknownIndicator(String),

    /// Series violates the contiguous month-start invariant
    #[error("Invalid forecast series: {0}")]
    InvalidSeries(String),

    /// Underlying model call failed
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// CSV export or import failed
    #[error("Export error: {0}")]
    Export(String),
}
