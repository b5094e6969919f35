use crate::model::PolarityScores;

/// Lexicon and rule based polarity scoring of raw text
pub trait PolarityScorer: Send + Sync {
    /// Score `text`; text with no sentiment-bearing words scores neutral
    fn polarity_scores(&self, text: &str) -> PolarityScores;
}
