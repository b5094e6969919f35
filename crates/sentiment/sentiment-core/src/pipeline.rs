//! Text sentiment pipeline
//!
//! Lower-cases and tokenizes text, keeps alphabetic non-stopword tokens for
//! display, and scores the original text. Filtering never feeds the scorer.

use std::sync::Arc;

use sentiment_spi::{PolarityScorer, Result, SentimentResult, Tokenizer};
use tracing::debug;

use crate::config::SentimentConfig;
use crate::lexicon::Lexicon;
use crate::stopwords;
use crate::tokenizer::TreebankTokenizer;
use crate::vader::VaderScorer;

/// Tokenizer plus scorer
pub struct SentimentPipeline {
    tokenizer: Box<dyn Tokenizer>,
    scorer: Arc<dyn PolarityScorer>,
}

impl SentimentPipeline {
    pub fn new(tokenizer: Box<dyn Tokenizer>, scorer: Arc<dyn PolarityScorer>) -> Self {
        Self { tokenizer, scorer }
    }

    /// Treebank tokenizer and a VADER scorer over the configured lexicon
    pub fn from_config(config: &SentimentConfig) -> Result<Self> {
        let lexicon = match &config.lexicon_path {
            Some(path) => Arc::new(Lexicon::from_file(path)?),
            None => Lexicon::embedded()?,
        };
        Ok(Self::new(
            Box::new(TreebankTokenizer::new()),
            Arc::new(VaderScorer::new(lexicon)),
        ))
    }

    /// Lower-cased tokens that are purely alphabetic and not stopwords, in order
    pub fn filter_tokens(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(&text.to_lowercase())
            .into_iter()
            .filter(|token| token.chars().all(char::is_alphabetic))
            .filter(|token| !stopwords::is_stopword(token))
            .collect()
    }

    /// Display tokens and the banded score of `text`
    ///
    /// Empty text yields no tokens and a neutral score; callers wanting to
    /// reject it must check before calling.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let tokens = self.filter_tokens(text);
        let scores = self.scorer.polarity_scores(text);
        let result = SentimentResult::new(tokens, scores);

        debug!(
            "Analyzed {} chars: {} tokens, compound {} ({})",
            text.len(),
            result.token_count,
            result.compound(),
            result.label
        );
        result
    }
}
