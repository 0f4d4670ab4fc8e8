//! The combined normalization pipeline.
//!
//! [`TextAnalyzer`] applies the full token-level normalization sequence used
//! by every extraction pass:
//!
//! ```text
//! Tokenize -> Stop Words -> Short-Token Removal -> Lemmatize
//! ```
//!
//! The pipeline is a pure function of its input: the same text always yields
//! the same token stream.
//!
//! # Examples
//!
//! ```
//! use wayfinder::analysis::analyzer::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new();
//! let tokens = analyzer.analyze("I love coding and solving problems!");
//! assert_eq!(tokens, vec!["love", "coding", "solving", "problem"]);
//! ```

use crate::analysis::lemmatizer::Lemmatizer;
use crate::analysis::stop::StopWords;
use crate::analysis::tokenizer::WordTokenizer;

/// Tokens of length less than or equal to this are discarded.
const MIN_TOKEN_LEN: usize = 3;

/// Analyzer combining tokenization, stop-word removal, and lemmatization.
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    tokenizer: WordTokenizer,
    stop_words: StopWords,
    lemmatizer: Lemmatizer,
}

impl TextAnalyzer {
    /// Create a new analyzer with the default English pipeline.
    pub fn new() -> Self {
        TextAnalyzer {
            tokenizer: WordTokenizer::new(),
            stop_words: StopWords::new(),
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Create an analyzer with a custom stop-word set.
    pub fn with_stop_words(stop_words: StopWords) -> Self {
        TextAnalyzer {
            tokenizer: WordTokenizer::new(),
            stop_words,
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Run the full pipeline over the given text.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .filter(|token| !self.stop_words.is_stop_word(token))
            .filter(|token| token.len() >= MIN_TOKEN_LEN)
            .map(|token| self.lemmatizer.lemmatize(&token))
            .collect()
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &WordTokenizer {
        &self.tokenizer
    }

    /// Get the name of this analyzer.
    pub fn name(&self) -> &'static str {
        "career_text"
    }
}
