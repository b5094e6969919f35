//! Exponential smoothing models
//!
//! Exponential smoothing assigns exponentially decreasing weights to past
//! observations. Two variants are exported as artifacts:
//!
//! - **Simple (SES)**: data without trend or seasonality
//! - **Double (Holt's)**: data with a linear trend
//!
//! Both are served through [`IndexPredictor`]: the fit records the
//! one-step-ahead in-sample predictions, and observation indices at or past
//! the end of the training data are forecast from the final state.

use model_spi::{ForecastModel, IndexPredictor, ModelError, Predictor, Result};
use serde::{Deserialize, Serialize};

fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if 0.0 < value && value < 1.0 {
        Ok(())
    } else {
        Err(ModelError::InvalidParameter {
            name: name.to_string(),
            reason: "must be between 0 and 1 (exclusive)".to_string(),
        })
    }
}

fn check_state(state: &[f64], fitted_values: &[f64]) -> Result<()> {
    if state.iter().chain(fitted_values).any(|x| !x.is_finite()) {
        return Err(ModelError::InvalidData(
            "model state contains NaN or infinite values".to_string(),
        ));
    }
    Ok(())
}

/// Shared index arithmetic for in-sample and out-of-sample predictions
fn predict_indices(
    fitted_values: &[f64],
    nobs: Option<usize>,
    start: usize,
    end: usize,
    forecast_at: impl Fn(usize) -> f64,
) -> Result<Vec<f64>> {
    if start > end {
        return Err(ModelError::InvalidRange { start, end });
    }

    let origin = nobs.unwrap_or(fitted_values.len());
    (start..=end)
        .map(|idx| {
            if idx >= origin {
                Ok(forecast_at(idx - origin + 1))
            } else {
                fitted_values.get(idx).copied().ok_or_else(|| {
                    ModelError::InvalidData(format!(
                        "no in-sample prediction recorded for observation {}",
                        idx
                    ))
                })
            }
        })
        .collect()
}

// ============================================================================
// Simple Exponential Smoothing (SES)
// ============================================================================

/// Simple Exponential Smoothing for stationary time series
///
/// Formula: `S_t = α * Y_t + (1 - α) * S_{t-1}`
///
/// # Example
///
/// ```rust
/// use model_core::{IndexPredictor, Predictor, SimpleExponentialSmoothing};
///
/// let data = vec![10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0];
/// let mut model = SimpleExponentialSmoothing::new(0.3).unwrap();
/// model.fit(&data).unwrap();
/// let start = model.training_len().unwrap_or(0);
/// let forecast = model.predict_range(start, start + 2).unwrap();
/// assert_eq!(forecast.len(), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SesParts")]
pub struct SimpleExponentialSmoothing {
    /// Smoothing parameter (0 < alpha < 1)
    alpha: f64,
    /// Current level estimate
    level: f64,
    /// One-step-ahead in-sample predictions
    #[serde(default)]
    fitted_values: Vec<f64>,
    /// Number of training observations, if recorded
    #[serde(default)]
    nobs: Option<usize>,
    /// Whether model has been fitted
    fitted: bool,
}

#[derive(Deserialize)]
struct SesParts {
    alpha: f64,
    level: f64,
    #[serde(default)]
    fitted_values: Vec<f64>,
    #[serde(default)]
    nobs: Option<usize>,
    fitted: bool,
}

impl TryFrom<SesParts> for SimpleExponentialSmoothing {
    type Error = ModelError;

    fn try_from(parts: SesParts) -> Result<Self> {
        check_unit_interval("alpha", parts.alpha)?;
        check_state(&[parts.level], &parts.fitted_values)?;
        Ok(Self {
            alpha: parts.alpha,
            level: parts.level,
            fitted_values: parts.fitted_values,
            nobs: parts.nobs,
            fitted: parts.fitted,
        })
    }
}

impl SimpleExponentialSmoothing {
    /// Create a new SES model
    ///
    /// # Arguments
    ///
    /// * `alpha` - Smoothing parameter (0 < alpha < 1).
    ///   Higher values give more weight to recent observations
    pub fn new(alpha: f64) -> Result<Self> {
        check_unit_interval("alpha", alpha)?;

        Ok(Self {
            alpha,
            level: 0.0,
            fitted_values: Vec::new(),
            nobs: None,
            fitted: false,
        })
    }

    /// Get the current level
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Get alpha parameter
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Predictor for SimpleExponentialSmoothing {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        if data.len() < 2 {
            return Err(ModelError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }

        self.level = data[0];
        self.fitted_values = Vec::with_capacity(data.len());
        self.fitted_values.push(data[0]);

        for &value in &data[1..] {
            self.fitted_values.push(self.level);
            self.level = self.alpha * value + (1.0 - self.alpha) * self.level;
        }

        self.nobs = Some(data.len());
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }

        // SES produces flat forecasts
        Ok(vec![self.level; steps])
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

impl IndexPredictor for SimpleExponentialSmoothing {
    fn training_len(&self) -> Option<usize> {
        self.nobs
    }

    fn predict_range(&self, start: usize, end: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }
        predict_indices(&self.fitted_values, self.nobs, start, end, |_| self.level)
    }
}

impl ForecastModel for SimpleExponentialSmoothing {
    fn kind(&self) -> &str {
        "simple_exponential_smoothing"
    }

    fn as_index_predictor(&self) -> Option<&dyn IndexPredictor> {
        if self.fitted {
            Some(self)
        } else {
            None
        }
    }
}

// ============================================================================
// Double Exponential Smoothing (Holt's Method)
// ============================================================================

/// Double Exponential Smoothing (Holt's Linear Trend Method)
///
/// Extends SES to capture linear trends in the data.
///
/// # Example
///
/// ```rust
/// use model_core::{DoubleExponentialSmoothing, IndexPredictor, Predictor};
///
/// let data = vec![10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0];
/// let mut model = DoubleExponentialSmoothing::new(0.3, 0.1).unwrap();
/// model.fit(&data).unwrap();
/// let forecast = model.predict_range(8, 10).unwrap();
/// assert!(forecast[2] > forecast[0]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "HoltParts")]
pub struct DoubleExponentialSmoothing {
    /// Level smoothing parameter
    alpha: f64,
    /// Trend smoothing parameter
    beta: f64,
    /// Current level
    level: f64,
    /// Current trend
    trend: f64,
    /// One-step-ahead in-sample predictions
    #[serde(default)]
    fitted_values: Vec<f64>,
    /// Number of training observations, if recorded
    #[serde(default)]
    nobs: Option<usize>,
    /// Whether model has been fitted
    fitted: bool,
}

#[derive(Deserialize)]
struct HoltParts {
    alpha: f64,
    beta: f64,
    level: f64,
    trend: f64,
    #[serde(default)]
    fitted_values: Vec<f64>,
    #[serde(default)]
    nobs: Option<usize>,
    fitted: bool,
}

impl TryFrom<HoltParts> for DoubleExponentialSmoothing {
    type Error = ModelError;

    fn try_from(parts: HoltParts) -> Result<Self> {
        check_unit_interval("alpha", parts.alpha)?;
        check_unit_interval("beta", parts.beta)?;
        check_state(&[parts.level, parts.trend], &parts.fitted_values)?;
        Ok(Self {
            alpha: parts.alpha,
            beta: parts.beta,
            level: parts.level,
            trend: parts.trend,
            fitted_values: parts.fitted_values,
            nobs: parts.nobs,
            fitted: parts.fitted,
        })
    }
}

impl DoubleExponentialSmoothing {
    /// Create a new Holt's method model
    ///
    /// # Arguments
    ///
    /// * `alpha` - Level smoothing (0 < alpha < 1)
    /// * `beta` - Trend smoothing (0 < beta < 1)
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        check_unit_interval("alpha", alpha)?;
        check_unit_interval("beta", beta)?;

        Ok(Self {
            alpha,
            beta,
            level: 0.0,
            trend: 0.0,
            fitted_values: Vec::new(),
            nobs: None,
            fitted: false,
        })
    }

    /// Get current level and trend
    pub fn components(&self) -> (f64, f64) {
        (self.level, self.trend)
    }

    fn forecast_at(&self, h: usize) -> f64 {
        self.level + h as f64 * self.trend
    }
}

impl Predictor for DoubleExponentialSmoothing {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        if data.len() < 3 {
            return Err(ModelError::InsufficientData {
                required: 3,
                actual: data.len(),
            });
        }

        self.level = data[0];
        self.trend = data[1] - data[0];
        self.fitted_values = Vec::with_capacity(data.len());
        self.fitted_values.push(data[0]);

        for &value in &data[1..] {
            self.fitted_values.push(self.level + self.trend);
            let prev_level = self.level;
            self.level = self.alpha * value + (1.0 - self.alpha) * (self.level + self.trend);
            self.trend = self.beta * (self.level - prev_level) + (1.0 - self.beta) * self.trend;
        }

        self.nobs = Some(data.len());
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }

        Ok((1..=steps).map(|h| self.forecast_at(h)).collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

impl IndexPredictor for DoubleExponentialSmoothing {
    fn training_len(&self) -> Option<usize> {
        self.nobs
    }

    fn predict_range(&self, start: usize, end: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }
        predict_indices(&self.fitted_values, self.nobs, start, end, |h| {
            self.forecast_at(h)
        })
    }
}

impl ForecastModel for DoubleExponentialSmoothing {
    fn kind(&self) -> &str {
        "holt"
    }

    fn as_index_predictor(&self) -> Option<&dyn IndexPredictor> {
        if self.fitted {
            Some(self)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ses_parameter_validation() {
        assert!(SimpleExponentialSmoothing::new(0.3).is_ok());
        assert!(SimpleExponentialSmoothing::new(0.0).is_err());
        assert!(SimpleExponentialSmoothing::new(1.0).is_err());
    }

    #[test]
    fn test_ses_out_of_sample_is_flat() {
        let mut model = SimpleExponentialSmoothing::new(0.5).unwrap();
        model.fit(&[10.0, 12.0, 14.0]).unwrap();
        // level: 10 -> 11 -> 12.5
        assert_eq!(model.level(), 12.5);
        assert_eq!(model.training_len(), Some(3));
        assert_eq!(model.predict_range(3, 5).unwrap(), vec![12.5, 12.5, 12.5]);
        assert_eq!(model.predict(2).unwrap(), vec![12.5, 12.5]);
    }

    #[test]
    fn test_ses_in_sample_predictions() {
        let mut model = SimpleExponentialSmoothing::new(0.5).unwrap();
        model.fit(&[10.0, 12.0, 14.0]).unwrap();
        assert_eq!(model.predict_range(0, 2).unwrap(), vec![10.0, 10.0, 11.0]);
        // Range spanning the end of the training data
        assert_eq!(model.predict_range(2, 3).unwrap(), vec![11.0, 12.5]);
    }

    #[test]
    fn test_ses_unknown_training_length() {
        let json = r#"{"alpha":0.5,"level":7.0,"fitted":true}"#;
        let model: SimpleExponentialSmoothing = serde_json::from_str(json).unwrap();
        assert_eq!(model.training_len(), None);
        assert_eq!(model.predict_range(0, 1).unwrap(), vec![7.0, 7.0]);
    }

    #[test]
    fn test_holt_trend_forecast() {
        let data: Vec<f64> = (0..10).map(|i| 10.0 + 2.0 * i as f64).collect();
        let mut model = DoubleExponentialSmoothing::new(0.3, 0.1).unwrap();
        model.fit(&data).unwrap();

        let (level, trend) = model.components();
        assert!((level - 28.0).abs() < 1e-9);
        assert!((trend - 2.0).abs() < 1e-9);

        let forecast = model.predict_range(10, 12).unwrap();
        assert!((forecast[0] - 30.0).abs() < 1e-9);
        assert!((forecast[1] - 32.0).abs() < 1e-9);
        assert!((forecast[2] - 34.0).abs() < 1e-9);
        assert_eq!(forecast, model.predict(3).unwrap());
    }

    #[test]
    fn test_holt_insufficient_data() {
        let mut model = DoubleExponentialSmoothing::new(0.3, 0.1).unwrap();
        assert!(matches!(
            model.fit(&[1.0, 2.0]),
            Err(ModelError::InsufficientData { required: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut model = DoubleExponentialSmoothing::new(0.3, 0.1).unwrap();
        model.fit(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(
            model.predict_range(6, 4),
            Err(ModelError::InvalidRange { start: 6, end: 4 })
        );
    }

    #[test]
    fn test_unfitted_models_expose_no_capability() {
        let ses = SimpleExponentialSmoothing::new(0.3).unwrap();
        let holt = DoubleExponentialSmoothing::new(0.3, 0.1).unwrap();
        assert!(ses.as_index_predictor().is_none());
        assert!(holt.as_index_predictor().is_none());
        assert!(ses.as_confidence_forecaster().is_none());
        assert!(matches!(ses.predict_range(0, 1), Err(ModelError::NotFitted)));
    }

    #[test]
    fn test_deserialize_rejects_invalid_parameters() {
        let ses = r#"{"alpha": 1.5, "level": 4.0, "fitted": true}"#;
        let err = serde_json::from_str::<SimpleExponentialSmoothing>(ses).unwrap_err();
        assert!(err.to_string().contains("alpha"));

        let holt = r#"{"alpha": 0.3, "beta": 0.0, "level": 4.0, "trend": 1.0, "fitted": true}"#;
        let err = serde_json::from_str::<DoubleExponentialSmoothing>(holt).unwrap_err();
        assert!(err.to_string().contains("beta"));
    }
}
