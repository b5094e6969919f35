//! Error types for forecast orchestration

mod forecast_error;

pub use forecast_error::{ForecastError, Result};
