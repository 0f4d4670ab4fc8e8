//! Word tokenization over normalized text.
//!
//! The tokenizer performs the first two normalization steps of the pipeline:
//! lowercasing and removal of non-alphabetic characters (whitespace is kept
//! so that word boundaries survive), followed by splitting on unicode word
//! boundaries.
//!
//! # Examples
//!
//! ```
//! use wayfinder::analysis::tokenizer::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens = tokenizer.tokenize("I love coding, math & design!");
//! assert_eq!(tokens, vec!["i", "love", "coding", "math", "design"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Tokenizer that lowercases, strips non-alphabetic characters, and splits
/// text into words.
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Normalize raw text: lowercase and replace every character that is
    /// neither alphabetic nor whitespace with a space.
    pub fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| {
                if c.is_alphabetic() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }

    /// Tokenize the given text into lowercase alphabetic words.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = self.normalize(text);
        normalized
            .unicode_words()
            .map(|word| word.to_string())
            .collect()
    }

    /// Get the name of this tokenizer (for debugging and configuration).
    pub fn name(&self) -> &'static str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("Hello World");
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_tokenize_strips_punctuation_and_digits() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("I earn $95,000 a year?!");
        assert_eq!(tokens, vec!["i", "earn", "a", "year"]);
    }

    #[test]
    fn test_tokenize_empty() {
        let tokenizer = WordTokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("123 456 !!!").is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordTokenizer::new().name(), "word");
    }
}
