//! Sentiment error types

use thiserror::Error;

/// Result type for sentiment operations
pub type Result<T> = std::result::Result<T, SentimentError>;

/// Errors surfaced by the sentiment stack
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SentimentError {
    /// Text was empty or whitespace only
    #[error("Nothing to analyze: input text is empty")]
    EmptyInput,

    /// Lexicon resource could not be read or parsed
    #[error("Lexicon error: {0}")]
    Lexicon(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SentimentError::EmptyInput.to_string(),
            "Nothing to analyze: input text is empty"
        );
        assert_eq!(
            SentimentError::Lexicon("line 3: missing score".to_string()).to_string(),
            "Lexicon error: line 3: missing score"
        );
    }
}
