//! Forecast Consumer API
//!
//! Configuration and construction of the forecast engine.
//!
//! This crate provides:
//! - [`ForecastConfig`] with defaults, a builder and environment overrides
//! - Construction of a [`ForecastEngine`] over a [`FileModelStore`]
//! - Re-exports from SPI and core for convenience

pub mod config;

pub use config::{ConfigError, ForecastConfig, ForecastConfigBuilder};

// Re-export from core
pub use forecast_core::{
    calendar, export, FileModelStore, FixedClock, ForecastBand, ForecastEngine, Indicator,
    IndicatorCatalog, LoadedModel, ModelCache, SystemClock, DEFAULT_MAX_HORIZON,
};

// Re-export types and contracts from SPI
pub use forecast_spi::{
    Clock, ForecastError, ForecastPoint, ForecastRequest, ForecastSeries, ForecastSummary,
    IndicatorKey, ModelStore, Result,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ForecastConfig, ForecastConfigBuilder};
    pub use forecast_core::{
        FileModelStore, ForecastBand, ForecastEngine, IndicatorCatalog, ModelCache, SystemClock,
    };
    pub use forecast_spi::{
        ForecastError, ForecastPoint, ForecastRequest, ForecastSeries, IndicatorKey, Result,
    };
}
