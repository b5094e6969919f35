//! Load-once model cache
//!
//! Each indicator owns a slot holding a [`OnceCell`]. The first caller for a
//! key runs the load inside the cell; concurrent callers for the same key wait
//! on that cell instead of loading again, while callers for other keys and
//! readers of initialized slots proceed without waiting. A failed load leaves
//! the cell empty so a later call retries.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use forecast_spi::{IndicatorKey, ModelStore, Result};
use model_spi::{ForecastModel, ModelShape};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

/// A deserialized model with its resolved call convention
pub struct LoadedModel {
    key: IndicatorKey,
    location: String,
    model: Box<dyn ForecastModel>,
    shape: Option<ModelShape>,
    loaded_at: Instant,
}

impl LoadedModel {
    /// Wrap a model, probing its call convention once
    pub fn new(key: IndicatorKey, location: String, model: Box<dyn ForecastModel>) -> Self {
        let shape = ModelShape::probe(model.as_ref());
        Self {
            key,
            location,
            model,
            shape,
            loaded_at: Instant::now(),
        }
    }

    pub fn key(&self) -> IndicatorKey {
        self.key
    }

    /// Where the artifact was loaded from
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn model(&self) -> &dyn ForecastModel {
        self.model.as_ref()
    }

    /// Call convention resolved at load time, `None` if unsupported
    pub fn shape(&self) -> Option<ModelShape> {
        self.shape
    }

    pub fn kind(&self) -> &str {
        self.model.kind()
    }

    pub fn loaded_at(&self) -> Instant {
        self.loaded_at
    }
}

impl fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedModel")
            .field("key", &self.key)
            .field("location", &self.location)
            .field("kind", &self.model.kind())
            .field("shape", &self.shape)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

type Slot = Arc<OnceCell<Arc<LoadedModel>>>;

/// Shared cache of loaded models, one entry per indicator
pub struct ModelCache {
    store: Arc<dyn ModelStore>,
    slots: RwLock<HashMap<IndicatorKey, Slot>>,
    loads: AtomicUsize,
}

impl ModelCache {
    pub fn new(store: Arc<dyn ModelStore>) -> Self {
        Self {
            store,
            slots: RwLock::new(HashMap::new()),
            loads: AtomicUsize::new(0),
        }
    }

    /// Get the model for `key`, loading it on first use
    pub fn get(&self, key: IndicatorKey) -> Result<Arc<LoadedModel>> {
        let slot = self.slot(key);

        if let Some(model) = slot.get() {
            debug!("Model cache hit for {}", key);
            return Ok(Arc::clone(model));
        }

        slot.get_or_try_init(|| self.load(key)).map(Arc::clone)
    }

    fn load(&self, key: IndicatorKey) -> Result<Arc<LoadedModel>> {
        let location = self.store.locate(key);
        info!("Loading model for {} from {}", key, location);

        let model = self.store.load(key).map_err(|e| {
            warn!("Failed to load model for {}: {}", key, e);
            e
        })?;
        self.loads.fetch_add(1, Ordering::Relaxed);

        let loaded = LoadedModel::new(key, location, model);
        match loaded.shape() {
            Some(shape) => info!("Model for {} is '{}' ({})", key, loaded.kind(), shape),
            None => warn!(
                "Model for {} is '{}' and exposes no supported call convention",
                key,
                loaded.kind()
            ),
        }

        Ok(Arc::new(loaded))
    }

    fn slot(&self, key: IndicatorKey) -> Slot {
        if let Some(slot) = self.slots.read().get(&key) {
            return Arc::clone(slot);
        }
        Arc::clone(self.slots.write().entry(key).or_default())
    }

    /// Whether a model for `key` has been loaded
    pub fn is_cached(&self, key: IndicatorKey) -> bool {
        self.slots
            .read()
            .get(&key)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Keys with a loaded model
    pub fn cached_keys(&self) -> Vec<IndicatorKey> {
        let mut keys: Vec<_> = self
            .slots
            .read()
            .iter()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(key, _)| *key)
            .collect();
        keys.sort();
        keys
    }

    /// Number of successful storage loads since creation
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    /// Location of the artifact for `key` in the backing store
    pub fn locate(&self, key: IndicatorKey) -> String {
        self.store.locate(key)
    }
}

impl fmt::Debug for ModelCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelCache")
            .field("cached", &self.cached_keys())
            .field("loads", &self.load_count())
            .finish()
    }
}
