//! Point forecast with prediction interval

use serde::{Deserialize, Serialize};

/// Forecast with confidence intervals, as returned by Shape A models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastWithConfidence {
    /// Point forecast
    pub forecast: Vec<f64>,
    /// Lower bound of confidence interval
    pub lower: Vec<f64>,
    /// Upper bound of confidence interval
    pub upper: Vec<f64>,
    /// Confidence level (e.g., 0.95 for 95%)
    pub confidence_level: f64,
}

impl ForecastWithConfidence {
    /// Point forecast with a degenerate (zero-width) band
    pub fn point(forecast: Vec<f64>) -> Self {
        Self {
            lower: forecast.clone(),
            upper: forecast.clone(),
            forecast,
            confidence_level: 0.0,
        }
    }

    /// Create from point forecast and standard errors
    pub fn from_standard_errors(
        forecast: Vec<f64>,
        std_errors: &[f64],
        confidence_level: f64,
    ) -> Self {
        let z = z_score(confidence_level);

        let lower = forecast
            .iter()
            .zip(std_errors.iter())
            .map(|(&f, &se)| f - z * se)
            .collect();

        let upper = forecast
            .iter()
            .zip(std_errors.iter())
            .map(|(&f, &se)| f + z * se)
            .collect();

        Self {
            forecast,
            lower,
            upper,
            confidence_level,
        }
    }

    /// Create confidence intervals from in-sample residuals
    ///
    /// The standard error grows with the square root of the horizon.
    pub fn from_residuals(forecast: Vec<f64>, residuals: &[f64], confidence_level: f64) -> Self {
        if residuals.is_empty() {
            let mut result = Self::point(forecast);
            result.confidence_level = confidence_level;
            return result;
        }

        let n = residuals.len() as f64;
        let mean = residuals.iter().sum::<f64>() / n;
        let variance = residuals.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        let std_errors: Vec<f64> = (0..forecast.len())
            .map(|h| std_dev * ((h + 1) as f64).sqrt())
            .collect();

        Self::from_standard_errors(forecast, &std_errors, confidence_level)
    }

    /// Number of forecast steps
    pub fn len(&self) -> usize {
        self.forecast.len()
    }

    /// Whether the forecast has no steps
    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }
}

/// Get z-score for a given confidence level
fn z_score(confidence_level: f64) -> f64 {
    match confidence_level {
        x if x >= 0.99 => 2.576,
        x if x >= 0.95 => 1.96,
        x if x >= 0.90 => 1.645,
        x if x >= 0.80 => 1.282,
        _ => 1.96,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_standard_errors() {
        let forecast = vec![100.0, 110.0, 120.0];
        let std_errors = vec![5.0, 10.0, 15.0];
        let result =
            ForecastWithConfidence::from_standard_errors(forecast.clone(), &std_errors, 0.95);

        assert_eq!(result.forecast, forecast);
        assert_eq!(result.confidence_level, 0.95);
        assert!((result.lower[0] - (100.0 - 1.96 * 5.0)).abs() < 1e-12);
        assert!((result.upper[2] - (120.0 + 1.96 * 15.0)).abs() < 1e-12);
    }

    #[test]
    fn test_from_residuals_widens_with_horizon() {
        let forecast = vec![100.0, 110.0, 120.0];
        let residuals = vec![-2.0, 1.0, -1.0, 2.0, 0.0];
        let result = ForecastWithConfidence::from_residuals(forecast.clone(), &residuals, 0.95);

        assert_eq!(result.forecast, forecast);
        assert!(result.upper[2] - result.lower[2] > result.upper[0] - result.lower[0]);
    }

    #[test]
    fn test_from_residuals_without_residuals() {
        let result = ForecastWithConfidence::from_residuals(vec![1.0, 2.0], &[], 0.9);
        assert_eq!(result.lower, vec![1.0, 2.0]);
        assert_eq!(result.upper, vec![1.0, 2.0]);
        assert_eq!(result.confidence_level, 0.9);
    }

    #[test]
    fn test_point() {
        let result = ForecastWithConfidence::point(vec![3.0]);
        assert_eq!(result.len(), 1);
        assert!(!result.is_empty());
        assert_eq!(result.lower, result.forecast);
    }

    #[test]
    fn test_z_score_levels() {
        assert_eq!(z_score(0.99), 2.576);
        assert_eq!(z_score(0.95), 1.96);
        assert_eq!(z_score(0.90), 1.645);
        assert_eq!(z_score(0.80), 1.282);
        assert_eq!(z_score(0.5), 1.96);
    }
}
