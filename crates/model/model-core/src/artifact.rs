//! Serialized model artifact envelope
//!
//! Artifacts are JSON documents tagged with the model family:
//!
//! ```json
//! { "kind": "holt", "alpha": 0.3, "beta": 0.1, "level": 28.0, "trend": 2.0, "fitted": true }
//! ```

use std::io::{Read, Write};

use model_spi::{ConfidenceForecaster, ForecastModel, IndexPredictor};
use serde::{Deserialize, Serialize};

use crate::arima::Arima;
use crate::smoothing::{DoubleExponentialSmoothing, SimpleExponentialSmoothing};

/// A previously-fitted model as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    /// Forecast-with-confidence model
    Arima(Arima),
    /// Index-based predict model without trend
    SimpleExponentialSmoothing(SimpleExponentialSmoothing),
    /// Index-based predict model with linear trend
    Holt(DoubleExponentialSmoothing),
}

impl ModelArtifact {
    /// Decode an artifact from JSON bytes
    pub fn from_json_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Decode an artifact from a reader
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    /// Encode the artifact as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Encode the artifact into a writer
    pub fn to_writer<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }

    fn inner(&self) -> &dyn ForecastModel {
        match self {
            ModelArtifact::Arima(m) => m,
            ModelArtifact::SimpleExponentialSmoothing(m) => m,
            ModelArtifact::Holt(m) => m,
        }
    }
}

impl ForecastModel for ModelArtifact {
    fn kind(&self) -> &str {
        self.inner().kind()
    }

    fn as_confidence_forecaster(&self) -> Option<&dyn ConfidenceForecaster> {
        self.inner().as_confidence_forecaster()
    }

    fn as_index_predictor(&self) -> Option<&dyn IndexPredictor> {
        self.inner().as_index_predictor()
    }
}

impl From<Arima> for ModelArtifact {
    fn from(model: Arima) -> Self {
        ModelArtifact::Arima(model)
    }
}

impl From<SimpleExponentialSmoothing> for ModelArtifact {
    fn from(model: SimpleExponentialSmoothing) -> Self {
        ModelArtifact::SimpleExponentialSmoothing(model)
    }
}

impl From<DoubleExponentialSmoothing> for ModelArtifact {
    fn from(model: DoubleExponentialSmoothing) -> Self {
        ModelArtifact::Holt(model)
    }
}
