//! Indicator catalog
//!
//! Maps each [`IndicatorKey`] to the label shown to users.

use forecast_spi::{IndicatorKey, Result};
use serde::Serialize;

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub key: IndicatorKey,
    pub label: &'static str,
}

/// The fixed set of forecast indicators
pub struct IndicatorCatalog;

impl IndicatorCatalog {
    /// All entries, in declaration order
    pub fn all() -> impl Iterator<Item = Indicator> {
        IndicatorKey::ALL.into_iter().map(|key| Indicator {
            key,
            label: Self::label(key),
        })
    }

    /// Indicator selected when a session starts
    pub fn default_key() -> IndicatorKey {
        IndicatorKey::LfprTotal
    }

    /// Parse a user-supplied key, rejecting anything outside the catalog
    pub fn parse(key: &str) -> Result<IndicatorKey> {
        key.trim().parse()
    }

    /// Display label for a key
    pub fn label(key: IndicatorKey) -> &'static str {
        match key {
            IndicatorKey::LfprTotal => "Labor Force Participation Rate (Total)",
            IndicatorKey::LfprMale => "Labor Force Participation Rate (Male)",
            IndicatorKey::LfprFemale => "Labor Force Participation Rate (Female)",
            IndicatorKey::ErTotal => "Employment Rate (Total)",
            IndicatorKey::ErMale => "Employment Rate (Male)",
            IndicatorKey::ErFemale => "Employment Rate (Female)",
            IndicatorKey::UrTotal => "Unemployment Rate (Total)",
            IndicatorKey::UrMale => "Unemployment Rate (Male)",
            IndicatorKey::UrFemale => "Unemployment Rate (Female)",
            IndicatorKey::UerTotal => "Underemployment Rate (Total)",
            IndicatorKey::UerMale => "Underemployment Rate (Male)",
            IndicatorKey::UerFemale => "Underemployment Rate (Female)",
        }
    }
}
