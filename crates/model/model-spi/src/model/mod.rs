//! Value types shared by model implementations and their consumers

mod forecast_with_confidence;
mod model_shape;

pub use forecast_with_confidence::ForecastWithConfidence;
pub use model_shape::ModelShape;
