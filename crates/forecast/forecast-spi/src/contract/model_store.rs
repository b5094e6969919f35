//! Trait for persistent model artifact storage

use model_spi::ForecastModel;

use crate::error::Result;
use crate::model::IndicatorKey;

/// Persistent storage of serialized models, one artifact per indicator
///
/// Implementations report a missing artifact as
/// [`ForecastError::ArtifactNotFound`](crate::ForecastError::ArtifactNotFound)
/// and an unreadable or undecodable one as
/// [`ForecastError::ArtifactCorrupt`](crate::ForecastError::ArtifactCorrupt).
pub trait ModelStore: Send + Sync {
    /// Human-readable location of the artifact for `key`
    fn locate(&self, key: IndicatorKey) -> String;

    /// Read and deserialize the artifact for `key`
    fn load(&self, key: IndicatorKey) -> Result<Box<dyn ForecastModel>>;
}
