//! Resolved call convention of a model

use std::fmt;

use crate::contract::ForecastModel;

/// The call convention a loaded model is dispatched through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelShape {
    /// Shape A: [`ConfidenceForecaster`](crate::ConfidenceForecaster)
    Confidence,
    /// Shape B: [`IndexPredictor`](crate::IndexPredictor)
    IndexBased,
}

impl ModelShape {
    /// Probe a model for a supported call convention
    ///
    /// Shape A is checked first; Shape B is the only fallback.
    /// Returns `None` when the model supports neither.
    pub fn probe(model: &dyn ForecastModel) -> Option<Self> {
        if model.as_confidence_forecaster().is_some() {
            Some(ModelShape::Confidence)
        } else if model.as_index_predictor().is_some() {
            Some(ModelShape::IndexBased)
        } else {
            None
        }
    }
}

impl fmt::Display for ModelShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelShape::Confidence => write!(f, "forecast-with-confidence"),
            ModelShape::IndexBased => write!(f, "index-based predict"),
        }
    }
}
