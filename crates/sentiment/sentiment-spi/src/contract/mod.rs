//! Contract traits for sentiment implementations
//!
//! - [`Tokenizer`]: splits text into word-like tokens
//! - [`PolarityScorer`]: rates raw text

mod polarity_scorer;
mod tokenizer;

pub use polarity_scorer::PolarityScorer;
pub use tokenizer::Tokenizer;
