//! File-backed model artifact storage

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use forecast_spi::{ForecastError, IndicatorKey, ModelStore, Result};
use model_core::ModelArtifact;
use model_spi::ForecastModel;
use tracing::debug;

/// Reads `{dir}/{prefix}_{key}.{extension}` JSON artifacts
#[derive(Debug, Clone)]
pub struct FileModelStore {
    dir: PathBuf,
    prefix: String,
    extension: String,
}

impl FileModelStore {
    pub fn new(
        dir: impl Into<PathBuf>,
        prefix: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    /// Artifact directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the artifact for `key` is read from
    pub fn path_for(&self, key: IndicatorKey) -> PathBuf {
        self.dir
            .join(format!("{}_{}.{}", self.prefix, key, self.extension))
    }
}

impl ModelStore for FileModelStore {
    fn locate(&self, key: IndicatorKey) -> String {
        self.path_for(key).display().to_string()
    }

    fn load(&self, key: IndicatorKey) -> Result<Box<dyn ForecastModel>> {
        let path = self.path_for(key);
        debug!("Reading model artifact from {:?}", path);

        let bytes = fs::read(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ForecastError::ArtifactNotFound {
                    key,
                    path: path.display().to_string(),
                }
            } else {
                ForecastError::ArtifactCorrupt {
                    key,
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        let artifact =
            ModelArtifact::from_json_slice(&bytes).map_err(|e| ForecastError::ArtifactCorrupt {
                key,
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(Box::new(artifact))
    }
}
