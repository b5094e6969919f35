use serde::{Deserialize, Serialize};

use super::{PolarityScores, SentimentLabel};

/// Filtered display tokens and the banded judgment of the raw text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Alphabetic, non-stopword tokens in input order, duplicates kept
    pub tokens: Vec<String>,
    pub token_count: usize,
    pub scores: PolarityScores,
    pub label: SentimentLabel,
}

impl SentimentResult {
    /// Assemble a result, banding the compound score
    pub fn new(tokens: Vec<String>, scores: PolarityScores) -> Self {
        Self {
            token_count: tokens.len(),
            label: SentimentLabel::from_compound(scores.compound),
            tokens,
            scores,
        }
    }

    pub fn compound(&self) -> f64 {
        self.scores.compound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_counts_and_bands() {
        let scores = PolarityScores {
            neg: 0.0,
            neu: 0.4,
            pos: 0.6,
            compound: 0.6369,
        };
        let result = SentimentResult::new(vec!["good".into(), "good".into()], scores);
        assert_eq!(result.token_count, 2);
        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.compound(), 0.6369);
    }

    #[test]
    fn test_serialized_label() {
        let result = SentimentResult::new(Vec::new(), PolarityScores::empty());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["label"], "Neutral");
        assert_eq!(json["token_count"], 0);
    }
}
