//! # model-core
//!
//! Fitted time series models that can be exported as artifacts and served.
//!
//! ## Supported Models
//!
//! - **ARIMA** - forecast-with-confidence ([`ConfidenceForecaster`])
//! - **Simple Exponential Smoothing** - index-based predict ([`IndexPredictor`])
//! - **Holt's linear trend** - index-based predict ([`IndexPredictor`])
//!
//! Every model serializes with serde; [`ModelArtifact`] is the tagged JSON
//! envelope written to and read from artifact files.
//!
//! ## Example
//!
//! ```rust
//! use model_core::prelude::*;
//!
//! let data: Vec<f64> = (1..=30).map(|x| x as f64).collect();
//! let mut arima = Arima::new(1, 1, 0).unwrap();
//! arima.fit(&data).unwrap();
//!
//! let artifact = ModelArtifact::from(arima);
//! let json = artifact.to_json().unwrap();
//! let restored = ModelArtifact::from_json_slice(json.as_bytes()).unwrap();
//! assert_eq!(ModelShape::probe(&restored), Some(ModelShape::Confidence));
//! ```

pub mod arima;
pub mod artifact;
pub mod smoothing;

pub use arima::Arima;
pub use artifact::ModelArtifact;
pub use smoothing::{DoubleExponentialSmoothing, SimpleExponentialSmoothing};

// Re-export from SPI
pub use model_spi::{
    ConfidenceForecaster, ForecastModel, ForecastWithConfidence, IndexPredictor, ModelError,
    ModelShape, Predictor, Result,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::arima::Arima;
    pub use crate::artifact::ModelArtifact;
    pub use crate::smoothing::{DoubleExponentialSmoothing, SimpleExponentialSmoothing};
    pub use model_spi::{
        ConfidenceForecaster, ForecastModel, ForecastWithConfidence, IndexPredictor, ModelError,
        ModelShape, Predictor, Result,
    };
}
