//! Sentiment value types

mod polarity_scores;
mod sentiment_label;
mod sentiment_result;

pub use polarity_scores::PolarityScores;
pub use sentiment_label::SentimentLabel;
pub use sentiment_result::SentimentResult;
