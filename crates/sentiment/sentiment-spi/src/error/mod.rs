//! Error types for sentiment analysis

mod sentiment_error;

pub use sentiment_error::{Result, SentimentError};
