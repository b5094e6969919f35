/// Splits text into word-like tokens
///
/// Punctuation and contractions are separated from words; case is preserved.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}
