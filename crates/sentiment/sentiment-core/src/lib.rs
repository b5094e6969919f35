//! Sentiment Core
//!
//! Core implementations of the text sentiment pipeline:
//!
//! - [`tokenizer`]: Treebank-style word tokenization
//! - [`stopwords`]: the English stopword set
//! - [`lexicon`]: valence lexicon loading and the bundled lexicon
//! - [`vader`]: lexicon and rule based polarity scoring
//! - [`pipeline`]: tokens for display, scores for the raw text

pub mod config;
pub mod lexicon;
pub mod pipeline;
pub mod stopwords;
pub mod tokenizer;
pub mod vader;

// Re-export SPI types for implementations
pub use sentiment_spi::{
    PolarityScorer, PolarityScores, Result, SentimentError, SentimentLabel, SentimentResult,
    Tokenizer,
};

// Re-export main types
pub use config::SentimentConfig;
pub use lexicon::Lexicon;
pub use pipeline::SentimentPipeline;
pub use tokenizer::TreebankTokenizer;
pub use vader::VaderScorer;
