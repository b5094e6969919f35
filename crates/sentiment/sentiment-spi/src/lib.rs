//! Sentiment Service Provider Interface
//!
//! Value types and contracts of the text sentiment pipeline: the tokenizer
//! that produces the display tokens, the scorer that rates the raw text, and
//! the banded result handed to the presentation layer.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{PolarityScorer, Tokenizer};
pub use error::{Result, SentimentError};
pub use model::{PolarityScores, SentimentLabel, SentimentResult};
