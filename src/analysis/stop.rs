//! Stop word handling.
//!
//! Provides the default English stop-word set used by the analysis pipeline.
//! Stop words carry no interest signal and are removed before keyword and
//! sentiment extraction.
//!
//! # Examples
//!
//! ```
//! use wayfinder::analysis::stop::StopWords;
//!
//! let stop_words = StopWords::new();
//! assert!(stop_words.is_stop_word("the"));
//! assert!(!stop_words.is_stop_word("coding"));
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// Default English stop words list.
///
/// Common English words that are filtered out before keyword extraction.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "am", "an", "and", "any",
    "are", "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "couldn", "d", "did", "didn", "do", "does", "doesn", "doing",
    "don", "down", "during", "each", "few", "for", "from", "further", "had", "hadn", "has",
    "hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "ll", "m",
    "ma", "me", "mightn", "more", "most", "mustn", "my", "myself", "needn", "no", "nor", "not",
    "now", "o", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "re", "s", "same", "shan", "she", "should", "shouldn", "so", "some",
    "such", "t", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "ve",
    "very", "was", "wasn", "we", "were", "weren", "what", "when", "where", "which", "while",
    "who", "whom", "why", "will", "with", "won", "wouldn", "y", "you", "your", "yours",
    "yourself", "yourselves",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A set of stop words checked during normalization.
#[derive(Clone, Debug)]
pub struct StopWords {
    words: Arc<HashSet<String>>,
}

impl StopWords {
    /// Create a stop-word set with the default English stop words.
    pub fn new() -> Self {
        Self::with_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a stop-word set with a custom word set.
    pub fn with_words(words: HashSet<String>) -> Self {
        StopWords {
            words: Arc::new(words),
        }
    }

    /// Create a stop-word set from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_words(words.into_iter().map(|s| s.into()).collect())
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stop_words() {
        let stop_words = StopWords::new();
        assert!(stop_words.is_stop_word("the"));
        assert!(stop_words.is_stop_word("and"));
        assert!(stop_words.is_stop_word("i"));
        assert!(!stop_words.is_stop_word("coding"));
        assert!(!stop_words.is_stop_word("store"));
    }

    #[test]
    fn test_custom_stop_words() {
        let stop_words = StopWords::from_words(vec!["foo", "bar"]);
        assert_eq!(stop_words.len(), 2);
        assert!(stop_words.is_stop_word("foo"));
        assert!(!stop_words.is_stop_word("the"));
    }
}
