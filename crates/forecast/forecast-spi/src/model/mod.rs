//! Model module containing data structures

mod forecast_request;
mod forecast_series;
mod indicator_key;

pub use forecast_request::ForecastRequest;
pub use forecast_series::{ForecastPoint, ForecastSeries, ForecastSummary};
pub use indicator_key::IndicatorKey;
