//! Word-list sentiment scoring.
//!
//! Counts occurrences of two small fixed word lists over the normalized
//! token stream. Strictly more positive hits gives [`Sentiment::Positive`],
//! strictly more negative gives [`Sentiment::Negative`], and a tie
//! (including zero hits on both sides) gives [`Sentiment::Neutral`].

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::TextAnalyzer;

/// Positive sentiment trigger words.
const POSITIVE_WORDS: &[&str] = &[
    "love", "enjoy", "like", "passionate", "excited", "interested", "good", "great", "amazing",
];

/// Negative sentiment trigger words.
const NEGATIVE_WORDS: &[&str] = &[
    "hate", "dislike", "boring", "difficult", "hard", "bad", "terrible", "awful",
];

/// Sentiment label for a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Word-list sentiment analyzer.
#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer {
    analyzer: TextAnalyzer,
}

impl SentimentAnalyzer {
    /// Create a new sentiment analyzer.
    pub fn new() -> Self {
        SentimentAnalyzer {
            analyzer: TextAnalyzer::new(),
        }
    }

    /// Score the sentiment of the given text.
    pub fn sentiment(&self, text: &str) -> Sentiment {
        let tokens = self.analyzer.analyze(text);

        let positive = tokens
            .iter()
            .filter(|t| POSITIVE_WORDS.contains(&t.as_str()))
            .count();
        let negative = tokens
            .iter()
            .filter(|t| NEGATIVE_WORDS.contains(&t.as_str()))
            .count();

        if positive > negative {
            Sentiment::Positive
        } else if negative > positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_sentiment() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(
            analyzer.sentiment("I love coding and solving problems"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_negative_sentiment() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(
            analyzer.sentiment("I hate difficult tasks"),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_neutral_sentiment() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.sentiment("I went to the store"), Sentiment::Neutral);
        assert_eq!(analyzer.sentiment(""), Sentiment::Neutral);
    }

    #[test]
    fn test_tie_is_neutral() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(
            analyzer.sentiment("I love it but it is difficult"),
            Sentiment::Neutral
        );
    }
}
