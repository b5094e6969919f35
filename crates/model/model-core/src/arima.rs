//! ARIMA (AutoRegressive Integrated Moving Average) model
//!
//! The model combines three components:
//!
//! - **AR (AutoRegressive)**: Uses past values to predict future values
//! - **I (Integrated)**: Differencing to achieve stationarity
//! - **MA (Moving Average)**: Uses past forecast errors
//!
//! A fitted ARIMA artifact is served through [`ConfidenceForecaster`]: it
//! forecasts a number of steps directly and attaches a prediction interval
//! derived from its in-sample residuals.
//!
//! ## Example
//!
//! ```rust
//! use model_core::{Arima, ConfidenceForecaster, Predictor};
//!
//! let data: Vec<f64> = (1..=20).map(|x| x as f64).collect();
//! let mut model = Arima::new(1, 1, 0).unwrap();
//! model.fit(&data).unwrap();
//! let result = model.get_forecast(3).unwrap();
//! assert_eq!(result.forecast.len(), 3);
//! ```

use model_spi::{
    ConfidenceForecaster, ForecastModel, ForecastWithConfidence, ModelError, Predictor, Result,
};
use serde::{Deserialize, Serialize};

fn default_confidence_level() -> f64 {
    0.95
}

/// ARIMA model for time series forecasting
///
/// Deserialized models are checked for internal consistency; an artifact whose
/// coefficients or history do not match its orders is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ArimaParts")]
pub struct Arima {
    /// AR order (p)
    p: usize,
    /// Differencing order (d)
    d: usize,
    /// MA order (q)
    q: usize,
    /// AR coefficients
    ar_coeffs: Vec<f64>,
    /// MA coefficients
    ma_coeffs: Vec<f64>,
    /// Constant term
    constant: f64,
    /// Original data (for undifferencing)
    original_data: Vec<f64>,
    /// Differenced data
    differenced_data: Vec<f64>,
    /// Residuals from fitting
    residuals: Vec<f64>,
    /// Level of the interval returned by `get_forecast`
    #[serde(default = "default_confidence_level")]
    confidence_level: f64,
    /// Whether the model has been fitted
    fitted: bool,
}

#[derive(Deserialize)]
struct ArimaParts {
    p: usize,
    d: usize,
    q: usize,
    ar_coeffs: Vec<f64>,
    ma_coeffs: Vec<f64>,
    constant: f64,
    original_data: Vec<f64>,
    differenced_data: Vec<f64>,
    residuals: Vec<f64>,
    #[serde(default = "default_confidence_level")]
    confidence_level: f64,
    fitted: bool,
}

fn check_coefficients(name: &str, coeffs: &[f64], order: usize) -> Result<()> {
    if coeffs.len() != order {
        return Err(ModelError::InvalidParameter {
            name: name.to_string(),
            reason: format!("expected {} coefficients, got {}", order, coeffs.len()),
        });
    }
    Ok(())
}

fn check_finite(name: &str, values: &[f64]) -> Result<()> {
    if values.iter().any(|x| !x.is_finite()) {
        return Err(ModelError::InvalidData(format!(
            "{} contains NaN or infinite values",
            name
        )));
    }
    Ok(())
}

impl TryFrom<ArimaParts> for Arima {
    type Error = ModelError;

    fn try_from(parts: ArimaParts) -> Result<Self> {
        let model = Arima::new(parts.p, parts.d, parts.q)?
            .with_confidence_level(parts.confidence_level)?;

        check_coefficients("ar_coeffs", &parts.ar_coeffs, parts.p)?;
        check_coefficients("ma_coeffs", &parts.ma_coeffs, parts.q)?;
        check_finite("ar_coeffs", &parts.ar_coeffs)?;
        check_finite("ma_coeffs", &parts.ma_coeffs)?;
        check_finite("constant", &[parts.constant])?;
        check_finite("original_data", &parts.original_data)?;
        check_finite("differenced_data", &parts.differenced_data)?;
        check_finite("residuals", &parts.residuals)?;

        if parts.fitted {
            // AR terms look back p steps on the differenced scale
            if parts.differenced_data.len() < parts.p {
                return Err(ModelError::InsufficientData {
                    required: parts.p,
                    actual: parts.differenced_data.len(),
                });
            }
            // undifferencing needs the last value of every level
            if parts.original_data.len() < parts.d {
                return Err(ModelError::InsufficientData {
                    required: parts.d,
                    actual: parts.original_data.len(),
                });
            }
        }

        Ok(Self {
            ar_coeffs: parts.ar_coeffs,
            ma_coeffs: parts.ma_coeffs,
            constant: parts.constant,
            original_data: parts.original_data,
            differenced_data: parts.differenced_data,
            residuals: parts.residuals,
            fitted: parts.fitted,
            ..model
        })
    }
}

impl Arima {
    /// Create a new ARIMA model with specified orders
    ///
    /// # Arguments
    ///
    /// * `p` - Order of autoregressive component (0-10)
    /// * `d` - Degree of differencing (0-2)
    /// * `q` - Order of moving average component (0-10)
    pub fn new(p: usize, d: usize, q: usize) -> Result<Self> {
        if p > 10 {
            return Err(ModelError::InvalidParameter {
                name: "p".to_string(),
                reason: "AR order must be <= 10".to_string(),
            });
        }
        if d > 2 {
            return Err(ModelError::InvalidParameter {
                name: "d".to_string(),
                reason: "Differencing order must be <= 2".to_string(),
            });
        }
        if q > 10 {
            return Err(ModelError::InvalidParameter {
                name: "q".to_string(),
                reason: "MA order must be <= 10".to_string(),
            });
        }

        Ok(Self {
            p,
            d,
            q,
            ar_coeffs: vec![0.0; p],
            ma_coeffs: vec![0.0; q],
            constant: 0.0,
            original_data: Vec::new(),
            differenced_data: Vec::new(),
            residuals: Vec::new(),
            confidence_level: default_confidence_level(),
            fitted: false,
        })
    }

    /// Set the confidence level used by [`ConfidenceForecaster::get_forecast`]
    pub fn with_confidence_level(mut self, level: f64) -> Result<Self> {
        if !(0.0 < level && level < 1.0) {
            return Err(ModelError::InvalidParameter {
                name: "confidence_level".to_string(),
                reason: "must be between 0 and 1 (exclusive)".to_string(),
            });
        }
        self.confidence_level = level;
        Ok(self)
    }

    /// Apply differencing to make series stationary
    fn difference(data: &[f64], order: usize) -> Vec<f64> {
        let mut result = data.to_vec();
        for _ in 0..order {
            result = result.windows(2).map(|w| w[1] - w[0]).collect();
        }
        result
    }

    /// Reverse differencing to get original scale
    ///
    /// Integrates from the innermost differencing level outward, each level
    /// continuing from its own last observed value.
    fn undifference(&self, forecasts: &[f64]) -> Vec<f64> {
        let mut result = forecasts.to_vec();

        for level in (0..self.d).rev() {
            let mut running = Self::difference(&self.original_data, level)
                .last()
                .copied()
                .unwrap_or_default();
            for value in result.iter_mut() {
                running += *value;
                *value = running;
            }
        }

        result
    }

    /// Estimate AR coefficients using Yule-Walker equations
    fn estimate_ar_coefficients(&self, data: &[f64]) -> Vec<f64> {
        if self.p == 0 {
            return Vec::new();
        }

        let n = data.len();
        let mean: f64 = data.iter().sum::<f64>() / n as f64;
        let centered: Vec<f64> = data.iter().map(|x| x - mean).collect();

        // Compute autocorrelations
        let mut autocorr = vec![0.0; self.p + 1];
        for (k, slot) in autocorr.iter_mut().enumerate() {
            let sum: f64 = (k..n).map(|i| centered[i] * centered[i - k]).sum();
            *slot = sum / n as f64;
        }

        // Solve Yule-Walker using Levinson-Durbin
        let mut coeffs = vec![0.0; self.p];
        if autocorr[0].abs() > 1e-10 {
            coeffs[0] = autocorr[1] / autocorr[0];

            for k in 1..self.p {
                let mut sum = autocorr[k + 1];
                for j in 0..k {
                    sum -= coeffs[j] * autocorr[k - j];
                }

                let mut denom = autocorr[0];
                for j in 0..k {
                    denom -= coeffs[j] * autocorr[j + 1];
                }

                if denom.abs() > 1e-10 {
                    let new_coeff = sum / denom;
                    let old_coeffs = coeffs.clone();
                    coeffs[k] = new_coeff;
                    for j in 0..k {
                        coeffs[j] = old_coeffs[j] - new_coeff * old_coeffs[k - 1 - j];
                    }
                }
            }
        }

        coeffs
    }

    /// Estimate MA coefficients from residuals
    fn estimate_ma_coefficients(&self, residuals: &[f64]) -> Vec<f64> {
        if self.q == 0 || residuals.is_empty() {
            return vec![0.0; self.q];
        }

        let n = residuals.len();
        let mean: f64 = residuals.iter().sum::<f64>() / n as f64;
        let centered: Vec<f64> = residuals.iter().map(|x| x - mean).collect();

        let mut coeffs = vec![0.0; self.q];
        let var: f64 = centered.iter().map(|x| x * x).sum::<f64>() / n as f64;

        if var.abs() > 1e-10 {
            for (k, coeff) in coeffs.iter_mut().enumerate() {
                let sum: f64 = ((k + 1)..n)
                    .map(|i| centered[i] * centered[i - k - 1])
                    .sum();
                // Bound coefficients for stability
                *coeff = ((sum / n as f64) / var).clamp(-0.99, 0.99);
            }
        }

        coeffs
    }

    /// Get model orders
    pub fn params(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    /// Get AR coefficients
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coeffs
    }

    /// Get MA coefficients
    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma_coeffs
    }

    /// Number of observations the model was fitted on
    pub fn nobs(&self) -> usize {
        self.original_data.len()
    }

    /// Confidence level of the forecast interval
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Residuals with a full AR history behind them
    fn effective_residuals(&self) -> &[f64] {
        let start = self.p.min(self.residuals.len());
        &self.residuals[start..]
    }
}

impl Predictor for Arima {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        let min_required = self.p + self.d + self.q + 10;
        if data.len() < min_required {
            return Err(ModelError::InsufficientData {
                required: min_required,
                actual: data.len(),
            });
        }

        if data.iter().any(|x| x.is_nan() || x.is_infinite()) {
            return Err(ModelError::InvalidData(
                "Data contains NaN or infinite values".to_string(),
            ));
        }

        self.original_data = data.to_vec();
        self.differenced_data = Self::difference(data, self.d);
        self.ar_coeffs = self.estimate_ar_coefficients(&self.differenced_data);

        // Compute residuals
        let n = self.differenced_data.len();
        self.residuals = vec![0.0; n];
        let mean: f64 = self.differenced_data.iter().sum::<f64>() / n as f64;
        self.constant = mean;

        for i in self.p..n {
            let mut prediction = self.constant;
            for j in 0..self.p {
                prediction += self.ar_coeffs[j] * (self.differenced_data[i - j - 1] - mean);
            }
            self.residuals[i] = self.differenced_data[i] - prediction;
        }

        self.ma_coeffs = self.estimate_ma_coefficients(&self.residuals);

        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }

        if steps == 0 {
            return Ok(Vec::new());
        }

        let n = self.differenced_data.len();
        let mut extended = self.differenced_data.clone();
        let mut extended_residuals = self.residuals.clone();

        // Generate forecasts on differenced scale
        for _ in 0..steps {
            let mut forecast = self.constant;

            for j in 0..self.p {
                let idx = extended.len() - j - 1;
                forecast += self.ar_coeffs[j] * (extended[idx] - self.constant);
            }

            for j in 0..self.q {
                if extended_residuals.len() > j {
                    let idx = extended_residuals.len() - j - 1;
                    forecast += self.ma_coeffs[j] * extended_residuals[idx];
                }
            }

            extended.push(forecast);
            extended_residuals.push(0.0); // Future residuals are 0
        }

        Ok(self.undifference(&extended[n..]))
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

impl ConfidenceForecaster for Arima {
    fn get_forecast(&self, steps: usize) -> Result<ForecastWithConfidence> {
        let forecast = self.predict(steps)?;
        Ok(ForecastWithConfidence::from_residuals(
            forecast,
            self.effective_residuals(),
            self.confidence_level,
        ))
    }
}

impl ForecastModel for Arima {
    fn kind(&self) -> &str {
        "arima"
    }

    fn as_confidence_forecaster(&self) -> Option<&dyn ConfidenceForecaster> {
        if self.fitted {
            Some(self)
        } else {
            None
        }
    }
}
