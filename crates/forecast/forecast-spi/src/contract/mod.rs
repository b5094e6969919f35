//! Contract module containing trait definitions for forecast orchestration

mod clock;
mod model_store;

pub use clock::Clock;
pub use model_store::ModelStore;
