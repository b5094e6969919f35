//! Sentiment Facade
//!
//! High-level API for text sentiment analysis. Re-exports all public types
//! from the sentiment stack and guards the pipeline against empty input.
//!
//! ```
//! use sentiment_facade::{analyze_text, SentimentLabel};
//!
//! let result = analyze_text("Hiring is strong and wages are improving!").unwrap();
//! assert_eq!(result.label, SentimentLabel::Positive);
//! assert!(analyze_text("   ").is_err());
//! ```

use once_cell::sync::OnceCell;
use tracing::warn;

// Re-export SPI types
pub use sentiment_spi::{
    PolarityScorer, PolarityScores, Result, SentimentError, SentimentLabel, SentimentResult,
    Tokenizer,
};

// Re-export core types and modules
pub use sentiment_core::{
    config, lexicon, pipeline, stopwords, tokenizer, vader, Lexicon, SentimentConfig,
    SentimentPipeline, TreebankTokenizer, VaderScorer,
};

static DEFAULT_PIPELINE: OnceCell<SentimentPipeline> = OnceCell::new();

/// Process-wide pipeline over the bundled resources, provisioned on first use
pub fn default_pipeline() -> Result<&'static SentimentPipeline> {
    DEFAULT_PIPELINE.get_or_try_init(|| SentimentPipeline::from_config(&SentimentConfig::default()))
}

/// Analyze `text` with `pipeline`, rejecting empty or whitespace-only text
pub fn analyze_with(pipeline: &SentimentPipeline, text: &str) -> Result<SentimentResult> {
    if text.trim().is_empty() {
        warn!("Rejected empty text for sentiment analysis");
        return Err(SentimentError::EmptyInput);
    }
    Ok(pipeline.analyze(text))
}

/// Analyze `text` with the default pipeline
pub fn analyze_text(text: &str) -> Result<SentimentResult> {
    analyze_with(default_pipeline()?, text)
}
