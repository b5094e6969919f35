use std::fmt;

use serde::{Deserialize, Serialize};

/// Compound scores strictly above this are positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores strictly below this are negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Three-way sentiment band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Band a compound score; both thresholds are themselves neutral
    pub fn from_compound(compound: f64) -> Self {
        if compound > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
