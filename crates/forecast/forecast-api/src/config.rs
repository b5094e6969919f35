//! Forecast configuration
//!
//! Locates model artifacts and bounds the forecast horizon.
//!
//! # Example
//!
//! ```
//! use forecast_api::ForecastConfig;
//!
//! let config = ForecastConfig::builder()
//!     .model_dir("/srv/models")
//!     .max_horizon(60)
//!     .build();
//! assert!(config.validate().is_ok());
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use forecast_core::{FileModelStore, ForecastEngine, ModelCache, SystemClock, DEFAULT_MAX_HORIZON};
use forecast_spi::Clock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub const ENV_MODEL_DIR: &str = "LABORATORIAL_MODEL_DIR";
pub const ENV_ARTIFACT_PREFIX: &str = "LABORATORIAL_ARTIFACT_PREFIX";
pub const ENV_ARTIFACT_EXT: &str = "LABORATORIAL_ARTIFACT_EXT";
pub const ENV_MAX_HORIZON: &str = "LABORATORIAL_MAX_HORIZON";

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("artifact prefix must not be empty")]
    EmptyPrefix,

    #[error("artifact extension must not be empty")]
    EmptyExtension,

    #[error("max horizon must be at least 1")]
    InvalidMaxHorizon,

    #[error("invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Where model artifacts live and how far ahead to forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Directory holding one artifact per indicator (default: "models")
    pub model_dir: PathBuf,

    /// Artifact file name prefix (default: "sarimax_model")
    pub artifact_prefix: String,

    /// Artifact file extension (default: "json")
    pub artifact_extension: String,

    /// Longest accepted horizon in months (default: 240)
    pub max_horizon: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            artifact_prefix: "sarimax_model".to_string(),
            artifact_extension: "json".to_string(),
            max_horizon: DEFAULT_MAX_HORIZON,
        }
    }
}

impl ForecastConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ForecastConfigBuilder {
        ForecastConfigBuilder::default()
    }

    /// Defaults overlaid with `LABORATORIAL_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overlaid with values from `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_MODEL_DIR) {
            config.model_dir = PathBuf::from(dir);
        }
        if let Some(prefix) = lookup(ENV_ARTIFACT_PREFIX) {
            config.artifact_prefix = prefix;
        }
        if let Some(ext) = lookup(ENV_ARTIFACT_EXT) {
            config.artifact_extension = ext.trim_start_matches('.').to_string();
        }
        if let Some(value) = lookup(ENV_MAX_HORIZON) {
            config.max_horizon =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnv {
                        name: ENV_MAX_HORIZON,
                        value,
                    })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.artifact_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        if self.artifact_extension.is_empty() {
            return Err(ConfigError::EmptyExtension);
        }
        if self.max_horizon == 0 {
            return Err(ConfigError::InvalidMaxHorizon);
        }
        Ok(())
    }

    /// Artifact store for this configuration
    pub fn model_store(&self) -> FileModelStore {
        FileModelStore::new(
            self.model_dir.clone(),
            self.artifact_prefix.clone(),
            self.artifact_extension.clone(),
        )
    }

    /// Empty model cache over the configured store
    pub fn build_cache(&self) -> Arc<ModelCache> {
        Arc::new(ModelCache::new(Arc::new(self.model_store())))
    }

    /// Engine reading the system clock
    pub fn build_engine(&self) -> ForecastEngine {
        self.build_engine_with_clock(Arc::new(SystemClock))
    }

    /// Engine reading `clock`
    pub fn build_engine_with_clock(&self, clock: Arc<dyn Clock>) -> ForecastEngine {
        info!(
            "Forecast engine over {:?} (max horizon {})",
            self.model_dir, self.max_horizon
        );
        ForecastEngine::new(self.build_cache(), clock).with_max_horizon(self.max_horizon)
    }
}

/// Builder for [`ForecastConfig`].
#[derive(Debug, Default)]
pub struct ForecastConfigBuilder {
    model_dir: Option<PathBuf>,
    artifact_prefix: Option<String>,
    artifact_extension: Option<String>,
    max_horizon: Option<usize>,
}

impl ForecastConfigBuilder {
    pub fn model_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.model_dir = Some(dir.into());
        self
    }

    pub fn artifact_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.artifact_prefix = Some(prefix.into());
        self
    }

    pub fn artifact_extension(mut self, extension: impl Into<String>) -> Self {
        self.artifact_extension = Some(extension.into());
        self
    }

    pub fn max_horizon(mut self, months: usize) -> Self {
        self.max_horizon = Some(months);
        self
    }

    /// Build the configuration, falling back to defaults for unset fields
    pub fn build(self) -> ForecastConfig {
        let default = ForecastConfig::default();
        ForecastConfig {
            model_dir: self.model_dir.unwrap_or(default.model_dir),
            artifact_prefix: self.artifact_prefix.unwrap_or(default.artifact_prefix),
            artifact_extension: self.artifact_extension.unwrap_or(default.artifact_extension),
            max_horizon: self.max_horizon.unwrap_or(default.max_horizon),
        }
    }
}
