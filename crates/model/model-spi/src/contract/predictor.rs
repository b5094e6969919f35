//! Fit contract for model producers
//!
//! Artifacts are fitted and serialized ahead of time. The serving side never
//! calls [`Predictor::fit`]; it is the contract model implementations follow
//! so fixtures and exported artifacts can be built programmatically.

use crate::error::Result;

/// Common trait for all fittable time series models
///
/// # Example
///
/// ```rust,ignore
/// use model_spi::Predictor;
///
/// fn fit_and_forecast<P: Predictor>(model: &mut P, data: &[f64], horizon: usize) -> model_spi::Result<Vec<f64>> {
///     model.fit(data)?;
///     model.predict(horizon)
/// }
/// ```
pub trait Predictor {
    /// Fit the model to historical data
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Predict `steps` values following the training data
    fn predict(&self, steps: usize) -> Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}
