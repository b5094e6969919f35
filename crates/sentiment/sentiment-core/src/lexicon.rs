//! Sentiment lexicon
//!
//! Lines are `token<TAB>mean-valence[<TAB>...]`; trailing columns (standard
//! deviation, raw ratings) are ignored. The embedded lexicon is parsed once
//! per process on first use.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use sentiment_spi::{Result, SentimentError};
use tracing::{debug, info};

const EMBEDDED: &str = include_str!("../resources/vader_lexicon.txt");

static EMBEDDED_LEXICON: OnceCell<Arc<Lexicon>> = OnceCell::new();

/// Token to mean valence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
}

impl Lexicon {
    /// Parse lexicon text
    pub fn parse(text: &str) -> Result<Self> {
        let mut valences = HashMap::new();

        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut columns = line.split('\t');
            let token = columns.next().unwrap_or_default().trim();
            let valence = columns
                .next()
                .ok_or_else(|| {
                    SentimentError::Lexicon(format!("line {}: missing valence", number + 1))
                })?
                .trim()
                .parse::<f64>()
                .map_err(|e| SentimentError::Lexicon(format!("line {}: {}", number + 1, e)))?;

            if token.is_empty() {
                return Err(SentimentError::Lexicon(format!(
                    "line {}: missing token",
                    number + 1
                )));
            }
            valences.insert(token.to_lowercase(), valence);
        }

        Ok(Self { valences })
    }

    /// Read a lexicon file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| SentimentError::Lexicon(format!("{}: {}", path.display(), e)))?;
        let lexicon = Self::parse(&text)?;
        info!("Loaded {} lexicon entries from {:?}", lexicon.len(), path);
        Ok(lexicon)
    }

    /// The bundled lexicon, shared by every caller
    pub fn embedded() -> Result<Arc<Self>> {
        EMBEDDED_LEXICON
            .get_or_try_init(|| {
                let lexicon = Self::parse(EMBEDDED)?;
                debug!("Provisioned embedded lexicon ({} entries)", lexicon.len());
                Ok(Arc::new(lexicon))
            })
            .map(Arc::clone)
    }

    /// Valence of a lower-case token
    pub fn get(&self, token: &str) -> Option<f64> {
        self.valences.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.valences.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

impl FromIterator<(String, f64)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            valences: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_ignores_trailing_columns() {
        let lexicon = Lexicon::parse("good\t1.9\t0.9434\t[2, 1, 2]\nBad\t-2.5\n\n").unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.get("good"), Some(1.9));
        assert_eq!(lexicon.get("bad"), Some(-2.5));
    }

    #[test]
    fn test_parse_errors_name_the_line() {
        let err = Lexicon::parse("good\t1.9\nbad\n").unwrap_err();
        assert_eq!(
            err,
            SentimentError::Lexicon("line 2: missing valence".to_string())
        );
        assert!(matches!(
            Lexicon::parse("good\tvery\n"),
            Err(SentimentError::Lexicon(_))
        ));
    }

    #[test]
    fn test_embedded_is_shared() {
        let first = Lexicon::embedded().unwrap();
        let second = Lexicon::embedded().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.get("great"), Some(3.1));
        assert_eq!(first.get("improving"), Some(1.8));
        assert!(!first.contains("rate"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "stellar\t2.8").unwrap();
        let lexicon = Lexicon::from_file(file.path()).unwrap();
        assert_eq!(lexicon.get("stellar"), Some(2.8));
    }

    #[test]
    fn test_from_missing_file() {
        assert!(matches!(
            Lexicon::from_file(Path::new("/nonexistent/lexicon.txt")),
            Err(SentimentError::Lexicon(_))
        ));
    }
}
