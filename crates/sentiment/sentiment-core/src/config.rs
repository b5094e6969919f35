//! Sentiment configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const ENV_LEXICON_PATH: &str = "LABORATORIAL_LEXICON_PATH";

/// Lexicon source for the pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// Lexicon file replacing the bundled one
    pub lexicon_path: Option<PathBuf>,
}

impl SentimentConfig {
    pub fn with_lexicon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon_path = Some(path.into());
        self
    }

    /// Defaults overlaid with `LABORATORIAL_LEXICON_PATH`
    pub fn from_env() -> Self {
        Self {
            lexicon_path: std::env::var_os(ENV_LEXICON_PATH).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_bundled_lexicon() {
        assert_eq!(SentimentConfig::default().lexicon_path, None);
    }

    #[test]
    fn test_deserialize() {
        let config: SentimentConfig =
            serde_json::from_str(r#"{"lexicon_path": "/etc/lexicon.txt"}"#).unwrap();
        assert_eq!(config.lexicon_path, Some(PathBuf::from("/etc/lexicon.txt")));
        let config: SentimentConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SentimentConfig::default());
    }
}
