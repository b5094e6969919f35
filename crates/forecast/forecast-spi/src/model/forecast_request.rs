//! Forecast request

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};
use crate::model::IndicatorKey;

/// An indicator and the number of future months to forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Indicator to forecast
    pub indicator: IndicatorKey,
    /// Number of months, at least 1
    pub horizon: usize,
}

impl ForecastRequest {
    /// Create a request
    pub fn new(indicator: IndicatorKey, horizon: usize) -> Self {
        Self { indicator, horizon }
    }

    /// Check the horizon against `1..=max_horizon`
    pub fn validate(&self, max_horizon: usize) -> Result<()> {
        if self.horizon == 0 || self.horizon > max_horizon {
            return Err(ForecastError::InvalidHorizon {
                horizon: self.horizon,
                max: max_horizon,
            });
        }
        Ok(())
    }
}
