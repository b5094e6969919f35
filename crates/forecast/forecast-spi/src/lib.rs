//! Forecast Service Provider Interface
//!
//! Defines the value types and contracts of the forecast orchestration layer:
//! indicator keys, calendar-aligned forecast series, the storage contract
//! model artifacts are loaded through, and the wall clock the engine reads.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Clock, ModelStore};
pub use error::{ForecastError, Result};
pub use model::{ForecastPoint, ForecastRequest, ForecastSeries, ForecastSummary, IndicatorKey};
