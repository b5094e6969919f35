//! English stopword set

use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::debug;

const ENGLISH: &str = include_str!("../resources/stopwords/english");

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let words: HashSet<_> = ENGLISH
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();
    debug!("Provisioned {} English stopwords", words.len());
    words
});

/// Whether `word` (lower-case) is an English stopword
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Size of the stopword set
pub fn count() -> usize {
    STOPWORDS.len()
}
