use serde::{Deserialize, Serialize};

/// Proportions of negative, neutral and positive weight, plus the normalized
/// compound score in `[-1, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl PolarityScores {
    /// Scores of text with no words at all
    ///
    /// Words without sentiment still count as neutral weight, so text made
    /// only of them scores `neu: 1.0` instead.
    pub fn empty() -> Self {
        Self {
            neg: 0.0,
            neu: 0.0,
            pos: 0.0,
            compound: 0.0,
        }
    }
}
