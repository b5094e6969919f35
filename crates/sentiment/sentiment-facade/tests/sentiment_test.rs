//! Unit tests for the sentiment facade

use sentiment_facade::{analyze_text, SentimentError, SentimentLabel};

#[test]
fn test_empty_input_rejected() {
    assert_eq!(analyze_text(""), Err(SentimentError::EmptyInput));
    assert_eq!(analyze_text(" \n\t "), Err(SentimentError::EmptyInput));
}

#[test]
fn test_filtered_tokens() {
    let result = analyze_text("The Rate is 3.5% but Improving Improving!").unwrap();
    assert_eq!(result.tokens, vec!["rate", "improving", "improving"]);
    assert_eq!(result.token_count, 3);
}

#[test]
fn test_labels() {
    assert_eq!(
        analyze_text("What a wonderful, encouraging report").unwrap().label,
        SentimentLabel::Positive
    );
    assert_eq!(
        analyze_text("The layoffs were a disaster").unwrap().label,
        SentimentLabel::Negative
    );
    assert_eq!(
        analyze_text("The report was published on Monday").unwrap().label,
        SentimentLabel::Neutral
    );
}

#[test]
fn test_compound_is_bounded() {
    let result = analyze_text("GREAT GREAT GREAT amazing wonderful best!!!! love it").unwrap();
    assert!(result.compound() <= 1.0);
    assert!(result.compound() > 0.9);
}

#[test]
fn test_no_alphabetic_tokens_still_scored() {
    let result = analyze_text("3.5% -> 4.1% :)").unwrap();
    assert!(result.tokens.is_empty());
    assert_eq!(result.label, SentimentLabel::Positive);
}
