//! Forecast Core
//!
//! Core implementations of the forecast orchestration layer:
//!
//! - [`catalog`]: the fixed table of indicators and their display labels
//! - [`store`]: file-backed model artifact storage
//! - [`cache`]: load-once, shared model cache
//! - [`calendar`]: month-start calendar arithmetic
//! - [`engine`]: the uniform forecast contract over both model call conventions
//! - [`export`]: CSV export and import of forecast series

pub mod cache;
pub mod calendar;
pub mod catalog;
pub mod clock;
pub mod engine;
pub mod export;
pub mod store;

// Re-export SPI types for implementations
pub use forecast_spi::{
    Clock, ForecastError, ForecastPoint, ForecastRequest, ForecastSeries, ForecastSummary,
    IndicatorKey, ModelStore, Result,
};

// Re-export main types
pub use cache::{LoadedModel, ModelCache};
pub use catalog::{Indicator, IndicatorCatalog};
pub use clock::{FixedClock, SystemClock};
pub use engine::{ForecastBand, ForecastEngine, DEFAULT_MAX_HORIZON};
pub use store::FileModelStore;
