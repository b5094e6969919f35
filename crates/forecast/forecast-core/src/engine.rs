//! Forecast engine
//!
//! Produces a calendar-aligned [`ForecastSeries`] for an indicator and a
//! horizon, whichever call convention the indicator's model exposes:
//!
//! - forecast-with-confidence models are asked for `horizon` steps directly
//! - index-based models are asked for observations
//!   `training_len ..= training_len + horizon - 1`
//!
//! Periods are derived from the clock, never from the model: the first value
//! belongs to the month after "today" and each next value to the month after.

use std::sync::Arc;

use forecast_spi::{
    Clock, ForecastError, ForecastPoint, ForecastRequest, ForecastSeries, IndicatorKey, Result,
};
use model_spi::{ForecastWithConfidence, ModelShape};
use serde::Serialize;
use tracing::{debug, info};

use crate::cache::{LoadedModel, ModelCache};
use crate::calendar;

/// Longest horizon accepted unless configured otherwise (20 years)
pub const DEFAULT_MAX_HORIZON: usize = 240;

/// A forecast series together with its prediction interval
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastBand {
    pub series: ForecastSeries,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    pub confidence_level: f64,
}

/// Uniform forecast contract over cached models
pub struct ForecastEngine {
    cache: Arc<ModelCache>,
    clock: Arc<dyn Clock>,
    max_horizon: usize,
}

impl ForecastEngine {
    pub fn new(cache: Arc<ModelCache>, clock: Arc<dyn Clock>) -> Self {
        Self {
            cache,
            clock,
            max_horizon: DEFAULT_MAX_HORIZON,
        }
    }

    /// Set the longest accepted horizon
    pub fn with_max_horizon(mut self, max_horizon: usize) -> Self {
        self.max_horizon = max_horizon;
        self
    }

    pub fn max_horizon(&self) -> usize {
        self.max_horizon
    }

    pub fn cache(&self) -> &Arc<ModelCache> {
        &self.cache
    }

    /// Forecast `horizon` months of `key`
    pub fn forecast(&self, key: IndicatorKey, horizon: usize) -> Result<ForecastSeries> {
        self.run(ForecastRequest::new(key, horizon))
    }

    /// Forecast for a request
    pub fn run(&self, request: ForecastRequest) -> Result<ForecastSeries> {
        request.validate(self.max_horizon)?;
        let ForecastRequest { indicator, horizon } = request;

        let model = self.cache.get(indicator)?;
        let values = point_forecast(&model, horizon)?;
        let series = self.align(indicator, horizon, values)?;

        info!(
            "Forecast for {} over {} months from {} via '{}'",
            indicator,
            horizon,
            series.start(),
            model.kind()
        );
        Ok(series)
    }

    /// Forecast with a prediction interval
    ///
    /// Only forecast-with-confidence models carry an interval; any other
    /// model fails with [`ForecastError::UnsupportedModelShape`].
    pub fn forecast_with_confidence(
        &self,
        key: IndicatorKey,
        horizon: usize,
    ) -> Result<ForecastBand> {
        ForecastRequest::new(key, horizon).validate(self.max_horizon)?;

        let model = self.cache.get(key)?;
        let forecaster = match model.shape() {
            Some(ModelShape::Confidence) => model.model().as_confidence_forecaster(),
            _ => None,
        }
        .ok_or_else(|| unsupported(&model))?;

        let ForecastWithConfidence {
            forecast,
            lower,
            upper,
            confidence_level,
        } = forecaster.get_forecast(horizon)?;
        check_len(&model, horizon, lower.len())?;
        check_len(&model, horizon, upper.len())?;

        Ok(ForecastBand {
            series: self.align(key, horizon, forecast)?,
            lower,
            upper,
            confidence_level,
        })
    }

    /// Pair values positionally with month starts following today
    fn align(&self, key: IndicatorKey, horizon: usize, values: Vec<f64>) -> Result<ForecastSeries> {
        let start = calendar::next_month_start(self.clock.today())?;
        let periods = calendar::month_starts(start, horizon)?;

        let points = periods
            .into_iter()
            .zip(values)
            .map(|(period, value)| ForecastPoint::new(period, value))
            .collect();
        ForecastSeries::new(key, points)
    }
}

/// Dispatch on the shape resolved at load time
fn point_forecast(model: &LoadedModel, horizon: usize) -> Result<Vec<f64>> {
    let values = match model.shape() {
        Some(ModelShape::Confidence) => {
            let forecaster = model
                .model()
                .as_confidence_forecaster()
                .ok_or_else(|| unsupported(model))?;
            forecaster.get_forecast(horizon)?.forecast
        }
        Some(ModelShape::IndexBased) => {
            let predictor = model
                .model()
                .as_index_predictor()
                .ok_or_else(|| unsupported(model))?;
            let start = predictor.training_len().unwrap_or(0);
            debug!(
                "Index-based predict for {} over [{}, {}]",
                model.key(),
                start,
                start + horizon - 1
            );
            predictor.predict_range(start, start + horizon - 1)?
        }
        None => return Err(unsupported(model)),
    };

    check_len(model, horizon, values.len())?;
    Ok(values)
}

fn check_len(model: &LoadedModel, expected: usize, actual: usize) -> Result<()> {
    if actual != expected {
        return Err(ForecastError::ModelOutputLengthMismatch {
            key: model.key(),
            expected,
            actual,
        });
    }
    Ok(())
}

fn unsupported(model: &LoadedModel) -> ForecastError {
    ForecastError::UnsupportedModelShape {
        key: model.key(),
        kind: model.kind().to_string(),
    }
}
