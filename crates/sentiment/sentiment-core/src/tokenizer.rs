//! Treebank-style word tokenizer
//!
//! Separates punctuation, brackets, quotes and clitics (`n't`, `'s`, `'ll`, ...)
//! from words by padding them with spaces, then splits on whitespace. A period
//! followed by whitespace or ending the text is split off as a sentence end;
//! periods inside tokens such as `3.5` stay attached.

use once_cell::sync::Lazy;
use regex::Regex;
use sentiment_spi::Tokenizer;
use tracing::warn;

/// Pattern and replacement, applied in order
type Rule = (Regex, &'static str);

fn compile(rules: &[(&str, &'static str)]) -> Vec<Rule> {
    rules
        .iter()
        .filter_map(|(pattern, replacement)| match Regex::new(pattern) {
            Ok(re) => Some((re, *replacement)),
            Err(e) => {
                warn!("Skipping tokenizer rule {:?}: {}", pattern, e);
                None
            }
        })
        .collect()
}

const STARTING_QUOTE_RULES: &[(&str, &str)] = &[
    (r"([«“‘„]|[`]+)", " ${1} "),
    (r#"^""#, "``"),
    (r"(``)", " ${1} "),
    (r#"([ (\[{<])("|'')"#, "${1} `` "),
];

const PUNCTUATION_RULES: &[(&str, &str)] = &[
    (r"([:,])([^\d])", " ${1} ${2}"),
    (r"([:,])$", " ${1} "),
    (r"\.\.\.", " ... "),
    (r"[;@#$%&]", " ${0} "),
    (r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2}${3} "),
    (r"([^.\s])(\.)(\s)", "${1} ${2}${3}"),
    (r"[?!]", " ${0} "),
    (r"([^'])' ", "${1} ' "),
];

const BRACKET_RULES: &[(&str, &str)] = &[(r"[\]\[(){}<>]", " ${0} "), (r"--", " -- ")];

const ENDING_QUOTE_RULES: &[(&str, &str)] = &[
    (r"([»”’])", " ${1} "),
    (r#"""#, " '' "),
    (r"(\S)('')", "${1} ${2} "),
    (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
    (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
];

const CONTRACTION_RULES: &[(&str, &str)] = &[
    (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
    (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
    (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
    (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
    (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
    (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
    (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
    (r"(?i)\b(wan)(na)\s", " ${1} ${2} "),
    (r"(?i) ('t)(is)\b", " ${1} ${2} "),
    (r"(?i) ('t)(was)\b", " ${1} ${2} "),
];

static STARTING_QUOTES: Lazy<Vec<Rule>> = Lazy::new(|| compile(STARTING_QUOTE_RULES));
static PUNCTUATION: Lazy<Vec<Rule>> = Lazy::new(|| compile(PUNCTUATION_RULES));
static BRACKETS: Lazy<Vec<Rule>> = Lazy::new(|| compile(BRACKET_RULES));
static ENDING_QUOTES: Lazy<Vec<Rule>> = Lazy::new(|| compile(ENDING_QUOTE_RULES));
static CONTRACTIONS: Lazy<Vec<Rule>> = Lazy::new(|| compile(CONTRACTION_RULES));

fn apply(rules: &[Rule], text: String) -> String {
    rules.iter().fold(text, |text, (re, replacement)| {
        re.replace_all(&text, *replacement).into_owned()
    })
}

/// Penn Treebank conventions for English word tokenization
#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankTokenizer;

impl TreebankTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let text = apply(&STARTING_QUOTES, text.to_string());
        let text = apply(&PUNCTUATION, text);
        let text = apply(&BRACKETS, text);
        let text = apply(&ENDING_QUOTES, format!(" {} ", text));
        let text = apply(&CONTRACTIONS, text);

        text.split_whitespace().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        TreebankTokenizer::new().tokenize(text)
    }

    #[test]
    fn test_splits_trailing_punctuation() {
        assert_eq!(
            tokens("the rate is 3.5% but improving improving!"),
            vec!["the", "rate", "is", "3.5", "%", "but", "improving", "improving", "!"]
        );
    }

    #[test]
    fn test_contractions() {
        assert_eq!(tokens("I can't go"), vec!["I", "ca", "n't", "go"]);
        assert_eq!(tokens("they're here"), vec!["they", "'re", "here"]);
        assert_eq!(tokens("it's fine"), vec!["it", "'s", "fine"]);
        assert_eq!(tokens("cannot"), vec!["can", "not"]);
    }

    #[test]
    fn test_commas_and_brackets() {
        assert_eq!(
            tokens("jobs, (mostly) part-time"),
            vec!["jobs", ",", "(", "mostly", ")", "part-time"]
        );
    }

    #[test]
    fn test_numbers_keep_separators() {
        assert_eq!(tokens("1,000 jobs"), vec!["1,000", "jobs"]);
    }

    #[test]
    fn test_sentence_periods() {
        assert_eq!(
            tokens("Wages rose. Hiring slowed."),
            vec!["Wages", "rose", ".", "Hiring", "slowed", "."]
        );
    }

    #[test]
    fn test_quotes() {
        assert_eq!(
            tokens(r#"he said "great" today"#),
            vec!["he", "said", "``", "great", "''", "today"]
        );
    }

    #[test]
    fn test_typographic_quotes() {
        assert_eq!(tokens("“Great” news"), vec!["“", "Great", "”", "news"]);
        assert_eq!(tokens("«bad»"), vec!["«", "bad", "»"]);
    }

    #[test]
    fn test_every_rule_compiles() {
        assert_eq!(STARTING_QUOTES.len(), STARTING_QUOTE_RULES.len());
        assert_eq!(PUNCTUATION.len(), PUNCTUATION_RULES.len());
        assert_eq!(BRACKETS.len(), BRACKET_RULES.len());
        assert_eq!(ENDING_QUOTES.len(), ENDING_QUOTE_RULES.len());
        assert_eq!(CONTRACTIONS.len(), CONTRACTION_RULES.len());
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(tokens("").is_empty());
        assert!(tokens("  \n\t ").is_empty());
    }
}
