//! Calendar-aligned forecast series

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};
use crate::model::IndicatorKey;

/// One forecast month and its value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// First day of the forecast month
    pub period: NaiveDate,
    /// Point forecast
    pub value: f64,
}

impl ForecastPoint {
    pub fn new(period: NaiveDate, value: f64) -> Self {
        Self { period, value }
    }
}

/// Mean, maximum and minimum of a forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

/// Forecast for one indicator
///
/// Invariant: non-empty, every period is a first-of-month date, and periods
/// advance by exactly one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeriesParts")]
pub struct ForecastSeries {
    indicator: IndicatorKey,
    points: Vec<ForecastPoint>,
}

#[derive(Deserialize)]
struct SeriesParts {
    indicator: IndicatorKey,
    points: Vec<ForecastPoint>,
}

impl TryFrom<SeriesParts> for ForecastSeries {
    type Error = ForecastError;

    fn try_from(parts: SeriesParts) -> Result<Self> {
        ForecastSeries::new(parts.indicator, parts.points)
    }
}

impl ForecastSeries {
    /// Build a series, checking the calendar invariant
    pub fn new(indicator: IndicatorKey, points: Vec<ForecastPoint>) -> Result<Self> {
        let first = points
            .first()
            .ok_or_else(|| ForecastError::InvalidSeries("series is empty".to_string()))?;
        if first.period.day() != 1 {
            return Err(ForecastError::InvalidSeries(format!(
                "period {} is not a month start",
                first.period
            )));
        }

        for pair in points.windows(2) {
            let expected = pair[0].period.checked_add_months(Months::new(1));
            if expected != Some(pair[1].period) {
                return Err(ForecastError::InvalidSeries(format!(
                    "period {} does not follow {}",
                    pair[1].period, pair[0].period
                )));
            }
        }

        if let Some(bad) = points.iter().find(|p| !p.value.is_finite()) {
            return Err(ForecastError::InvalidSeries(format!(
                "value for {} is not finite",
                bad.period
            )));
        }

        Ok(Self { indicator, points })
    }

    /// Indicator the series was forecast for
    pub fn indicator(&self) -> IndicatorKey {
        self.indicator
    }

    /// Forecast points in period order
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Number of forecast months
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed series
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First forecast month
    pub fn start(&self) -> NaiveDate {
        self.points[0].period
    }

    /// Forecast values in period order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Mean, maximum and minimum of the forecast values
    pub fn summary(&self) -> ForecastSummary {
        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;
        let mut sum = 0.0;
        for value in self.values() {
            max = max.max(value);
            min = min.min(value);
            sum += value;
        }

        ForecastSummary {
            mean: sum / self.points.len() as f64,
            max,
            min,
        }
    }

    /// Consume the series, returning its points
    pub fn into_points(self) -> Vec<ForecastPoint> {
        self.points
    }
}
