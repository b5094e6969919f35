//! Lexicon and rule based polarity scoring (VADER semantics)
//!
//! Raw text is split on whitespace, each word scored from the lexicon and
//! adjusted by the words before it (boosters, negations, ALL-CAPS emphasis,
//! idioms). Contrast after "but" outweighs what precedes it, and `!`/`?`
//! marks amplify the total before it is normalized into `[-1, 1]`.

use std::sync::Arc;

use sentiment_spi::{PolarityScorer, PolarityScores, Result};

use crate::lexicon::Lexicon;

/// Booster increment
const B_INCR: f64 = 0.293;
/// Dampener increment
const B_DECR: f64 = -0.293;
/// ALL-CAPS emphasis increment
const C_INCR: f64 = 0.733;
/// Negation scalar
const N_SCALAR: f64 = -0.74;
/// Normalization constant approximating the maximum expected sum
const ALPHA: f64 = 15.0;

const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't",
    "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt",
    "havent", "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't",
    "isn't", "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not",
    "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't",
    "shan't", "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't",
    "wouldn't", "rarely", "seldom", "despite",
];

const BOOSTER_INCR: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerable", "considerably",
    "decidedly", "deeply", "enormous", "enormously", "entirely", "especially", "exceptional",
    "exceptionally", "extreme", "extremely", "fabulously", "flipping", "flippin", "frickin",
    "fricking", "fully", "greatly", "hella", "highly", "hugely", "incredible", "incredibly",
    "intensely", "major", "majorly", "more", "most", "particularly", "purely", "quite",
    "really", "remarkably", "so", "substantially", "thoroughly", "total", "totally",
    "tremendous", "tremendously", "uber", "unbelievably", "unusually", "utter", "utterly",
    "very",
];

const BOOSTER_DECR: &[&str] = &[
    "almost", "barely", "hardly", "just enough", "kind of", "kinda", "kindof", "kind-of",
    "less", "little", "marginal", "marginally", "occasional", "occasionally", "partly",
    "scarce", "scarcely", "slight", "slightly", "somewhat", "sort of", "sorta", "sortof",
    "sort-of",
];

const SPECIAL_CASES: &[(&str, f64)] = &[
    ("the shit", 3.0),
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("badass", 1.5),
    ("bus stop", 0.0),
    ("yeah right", -2.0),
    ("kiss of death", -1.5),
    ("to die for", 3.0),
    ("beating heart", 3.1),
    ("broken heart", -2.9),
];

fn booster(word: &str) -> Option<f64> {
    if BOOSTER_INCR.contains(&word) {
        Some(B_INCR)
    } else if BOOSTER_DECR.contains(&word) {
        Some(B_DECR)
    } else {
        None
    }
}

fn special_case(phrase: &str) -> Option<f64> {
    SPECIAL_CASES
        .iter()
        .find(|(p, _)| *p == phrase)
        .map(|(_, v)| *v)
}

fn is_negation(word: &str) -> bool {
    NEGATE.contains(&word) || word.contains("n't")
}

/// Has a cased character and no lower-case ones
fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Whitespace-separated words, edge punctuation stripped unless that would
/// leave two characters or fewer (keeps emoticons like `:)`)
fn words_of(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .collect()
}

/// Text prepared for scoring
struct SentiText<'a> {
    words: Vec<&'a str>,
    lower: Vec<String>,
    /// Some, but not all, words are ALL-CAPS
    cap_differential: bool,
}

impl<'a> SentiText<'a> {
    fn new(text: &'a str) -> Self {
        let words = words_of(text);
        let lower = words.iter().map(|w| w.to_lowercase()).collect();
        let caps = words.iter().filter(|w| is_upper(w)).count();
        let cap_differential = caps > 0 && caps < words.len();
        Self {
            words,
            lower,
            cap_differential,
        }
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

/// VADER-style scorer over a [`Lexicon`]
#[derive(Debug, Clone)]
pub struct VaderScorer {
    lexicon: Arc<Lexicon>,
}

impl VaderScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Scorer over the bundled lexicon
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(Lexicon::embedded()?))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn in_lexicon(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    /// Booster contribution of `word` to a word of `valence`
    fn scalar_inc_dec(&self, word: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
        let Some(mut scalar) = booster(lower) else {
            return 0.0;
        };
        if valence < 0.0 {
            scalar = -scalar;
        }
        if is_upper(word) && cap_diff {
            if valence > 0.0 {
                scalar += C_INCR;
            } else {
                scalar -= C_INCR;
            }
        }
        scalar
    }

    fn sentiment_valence(&self, text: &SentiText<'_>, i: usize) -> f64 {
        let lower = &text.lower;
        let Some(base) = self.lexicon.get(&lower[i]) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" directly before another lexicon word negates it instead
        if lower[i] == "no" && i + 1 < text.len() && self.in_lexicon(&lower[i + 1]) {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no")
            || (i > 1 && lower[i - 2] == "no")
            || (i > 2 && lower[i - 3] == "no" && (lower[i - 1] == "or" || lower[i - 1] == "nor"))
        {
            valence = base * N_SCALAR;
        }

        if is_upper(text.words[i]) && text.cap_differential {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for distance in 0..3 {
            if i <= distance {
                break;
            }
            let j = i - (distance + 1);
            if self.in_lexicon(&lower[j]) {
                continue;
            }

            let mut scalar =
                self.scalar_inc_dec(text.words[j], &lower[j], valence, text.cap_differential);
            match distance {
                1 => scalar *= 0.95,
                2 => scalar *= 0.9,
                _ => {}
            }
            valence += scalar;
            valence = negation_check(valence, lower, distance, i);
            if distance == 2 {
                valence = special_idioms_check(valence, lower, i);
            }
        }

        self.least_check(valence, lower, i)
    }

    fn least_check(&self, valence: f64, lower: &[String], i: usize) -> f64 {
        if i == 0 || lower[i - 1] != "least" || self.in_lexicon(&lower[i - 1]) {
            return valence;
        }
        if i > 1 && (lower[i - 2] == "at" || lower[i - 2] == "very") {
            return valence;
        }
        valence * N_SCALAR
    }
}

fn negation_check(valence: f64, lower: &[String], distance: usize, i: usize) -> f64 {
    let preceding = &lower[i - (distance + 1)];
    match distance {
        0 => {
            if is_negation(preceding) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if lower[i - 2] == "never" && (lower[i - 1] == "so" || lower[i - 1] == "this") {
                return valence * 1.25;
            }
            if lower[i - 2] == "without" && lower[i - 1] == "doubt" {
                return valence;
            }
            if is_negation(preceding) {
                return valence * N_SCALAR;
            }
        }
        _ => {
            let so_this = |w: &str| w == "so" || w == "this";
            if lower[i - 3] == "never" && (so_this(&lower[i - 2]) || so_this(&lower[i - 1])) {
                return valence * 1.25;
            }
            if lower[i - 3] == "without" && (lower[i - 2] == "doubt" || lower[i - 1] == "doubt") {
                return valence;
            }
            if is_negation(preceding) {
                return valence * N_SCALAR;
            }
        }
    }
    valence
}

/// Multi-word idioms ending at, spanning or starting at `i` (requires `i >= 3`)
fn special_idioms_check(mut valence: f64, lower: &[String], i: usize) -> f64 {
    let one_zero = format!("{} {}", lower[i - 1], lower[i]);
    let two_one_zero = format!("{} {} {}", lower[i - 2], lower[i - 1], lower[i]);
    let two_one = format!("{} {}", lower[i - 2], lower[i - 1]);
    let three_two_one = format!("{} {} {}", lower[i - 3], lower[i - 2], lower[i - 1]);
    let three_two = format!("{} {}", lower[i - 3], lower[i - 2]);

    if let Some(v) = [&one_zero, &two_one_zero, &two_one, &three_two_one, &three_two]
        .into_iter()
        .find_map(|seq| special_case(seq))
    {
        valence = v;
    }
    if i + 1 < lower.len() {
        if let Some(v) = special_case(&format!("{} {}", lower[i], lower[i + 1])) {
            valence = v;
        }
    }
    if i + 2 < lower.len() {
        if let Some(v) = special_case(&format!("{} {} {}", lower[i], lower[i + 1], lower[i + 2]))
        {
            valence = v;
        }
    }

    for n_gram in [&three_two_one, &three_two, &two_one] {
        if let Some(b) = booster(n_gram) {
            valence += b;
        }
    }
    valence
}

/// Words before the first "but" count half, words after it half again as much
fn but_check(lower: &[String], sentiments: &mut [f64]) {
    if let Some(bi) = lower.iter().position(|w| w == "but") {
        for (si, sentiment) in sentiments.iter_mut().enumerate() {
            if si < bi {
                *sentiment *= 0.5;
            } else if si > bi {
                *sentiment *= 1.5;
            }
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4);
    let questions = text.matches('?').count();
    let qm = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    exclamations as f64 * 0.292 + qm
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::empty();
    }

    let emphasis = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    // +1/-1 compensates for neutral words counting as 1
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

impl PolarityScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let senti = SentiText::new(text);
        let mut sentiments = Vec::with_capacity(senti.len());

        for i in 0..senti.len() {
            let word = senti.lower[i].as_str();
            let kind_of = word == "kind" && senti.lower.get(i + 1).is_some_and(|w| w == "of");
            if booster(word).is_some() || kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&senti, i));
        }

        but_check(&senti.lower, &mut sentiments);
        score_valence(&sentiments, text)
    }
}
