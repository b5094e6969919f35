//! Labor-market indicator identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// Identifier of one forecast indicator
///
/// The set is closed: participation, employment, unemployment and
/// underemployment rates, each by Total/Male/Female. The string form
/// (e.g. `UR_Total`) names the model artifact on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndicatorKey {
    #[serde(rename = "LFPR_Total")]
    LfprTotal,
    #[serde(rename = "LFPR_Male")]
    LfprMale,
    #[serde(rename = "LFPR_Female")]
    LfprFemale,
    #[serde(rename = "ER_Total")]
    ErTotal,
    #[serde(rename = "ER_Male")]
    ErMale,
    #[serde(rename = "ER_Female")]
    ErFemale,
    #[serde(rename = "UR_Total")]
    UrTotal,
    #[serde(rename = "UR_Male")]
    UrMale,
    #[serde(rename = "UR_Female")]
    UrFemale,
    #[serde(rename = "UER_Total")]
    UerTotal,
    #[serde(rename = "UER_Male")]
    UerMale,
    #[serde(rename = "UER_Female")]
    UerFemale,
}

impl IndicatorKey {
    /// Every indicator, in catalog order
    pub const ALL: [IndicatorKey; 12] = [
        IndicatorKey::LfprTotal,
        IndicatorKey::LfprMale,
        IndicatorKey::LfprFemale,
        IndicatorKey::ErTotal,
        IndicatorKey::ErMale,
        IndicatorKey::ErFemale,
        IndicatorKey::UrTotal,
        IndicatorKey::UrMale,
        IndicatorKey::UrFemale,
        IndicatorKey::UerTotal,
        IndicatorKey::UerMale,
        IndicatorKey::UerFemale,
    ];

    /// Artifact-facing string form
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKey::LfprTotal => "LFPR_Total",
            IndicatorKey::LfprMale => "LFPR_Male",
            IndicatorKey::LfprFemale => "LFPR_Female",
            IndicatorKey::ErTotal => "ER_Total",
            IndicatorKey::ErMale => "ER_Male",
            IndicatorKey::ErFemale => "ER_Female",
            IndicatorKey::UrTotal => "UR_Total",
            IndicatorKey::UrMale => "UR_Male",
            IndicatorKey::UrFemale => "UR_Female",
            IndicatorKey::UerTotal => "UER_Total",
            IndicatorKey::UerMale => "UER_Male",
            IndicatorKey::UerFemale => "UER_Female",
        }
    }
}

impl fmt::Display for IndicatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorKey {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndicatorKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ForecastError::UnknownIndicator(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for key in IndicatorKey::ALL {
            assert_eq!(key.as_str().parse::<IndicatorKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "ur_total".parse::<IndicatorKey>(),
            Err(ForecastError::UnknownIndicator("ur_total".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_artifact_names() {
        let json = serde_json::to_string(&IndicatorKey::UerFemale).unwrap();
        assert_eq!(json, "\"UER_Female\"");
        let key: IndicatorKey = serde_json::from_str("\"LFPR_Male\"").unwrap();
        assert_eq!(key, IndicatorKey::LfprMale);
    }

    #[test]
    fn test_catalog_order() {
        assert_eq!(IndicatorKey::ALL.len(), 12);
        assert_eq!(IndicatorKey::ALL[0], IndicatorKey::LfprTotal);
        assert_eq!(IndicatorKey::ALL[11], IndicatorKey::UerFemale);
    }
}
