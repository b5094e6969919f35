//! One session's mutable record

use forecast_core::IndicatorCatalog;
use forecast_spi::{ForecastSeries, IndicatorKey, Result};
use serde::Serialize;
use tracing::debug;

use crate::page::Page;

/// Page, selected indicator and last successful forecast of a session
///
/// The stored forecast is keyed by the indicator it was produced for, so it
/// is only visible while that indicator is selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    page: Page,
    selected: IndicatorKey,
    forecast: Option<ForecastSeries>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            page: Page::Home,
            selected: IndicatorCatalog::default_key(),
            forecast: None,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn set_page(&mut self, page: Page) {
        self.page = page;
    }

    pub fn get_selection(&self) -> IndicatorKey {
        self.selected
    }

    pub fn set_selection(&mut self, key: IndicatorKey) {
        if key != self.selected {
            debug!("Selection changed from {} to {}", self.selected, key);
        }
        self.selected = key;
    }

    /// Store a forecast, replacing any earlier one
    pub fn set_forecast(&mut self, series: ForecastSeries) {
        self.forecast = Some(series);
    }

    /// Last forecast for the selected indicator, if any
    pub fn get_forecast(&self) -> Option<&ForecastSeries> {
        self.forecast
            .as_ref()
            .filter(|series| series.indicator() == self.selected)
    }

    /// Store the outcome of a forecast call
    ///
    /// A failure leaves the previous forecast in place and is handed back.
    pub fn record_forecast(&mut self, outcome: Result<ForecastSeries>) -> Result<&ForecastSeries> {
        let series = outcome?;
        Ok(&*self.forecast.insert(series))
    }

    /// Back to defaults, as at session start
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
