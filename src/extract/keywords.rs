//! Vocabulary-driven keyword extraction.
//!
//! Maps free text onto the fixed interest vocabulary: a tag is emitted when
//! any of its trigger phrases appears either as a normalized token or as a
//! literal substring of the lowercased original text (the substring check
//! catches multi-word triggers like "video game" that tokenization splits).
//! Up to five leftover significant tokens are appended to capture signal
//! outside the vocabulary.
//!
//! # Examples
//!
//! ```
//! use wayfinder::extract::keywords::KeywordExtractor;
//!
//! let extractor = KeywordExtractor::new();
//! let keywords = extractor.extract("I love coding and solving problems");
//! assert!(keywords.iter().any(|k| k == "Coding"));
//! ```

use std::collections::HashSet;

use crate::analysis::analyzer::TextAnalyzer;
use crate::vocabulary::Vocabulary;

/// Maximum number of non-vocabulary tokens appended to the keyword list.
const MAX_SIGNIFICANT_TOKENS: usize = 5;

/// Tokens shorter than this are not considered significant.
const MIN_SIGNIFICANT_LEN: usize = 4;

/// Extracts interest tags and salient tokens from raw text.
#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    analyzer: TextAnalyzer,
}

impl KeywordExtractor {
    /// Create a new keyword extractor with the default analyzer.
    pub fn new() -> Self {
        KeywordExtractor {
            analyzer: TextAnalyzer::new(),
        }
    }

    /// Extract vocabulary tags and significant leftover tokens.
    ///
    /// The result is deduplicated. Tags come first in vocabulary order,
    /// followed by leftover tokens in stream order, so repeated calls on the
    /// same input yield the same sequence.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let tokens = self.analyzer.analyze(text);
        let token_set: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
        let lowered = text.to_lowercase();

        let mut keywords: Vec<String> = Vec::new();

        // First matching trigger wins per tag; tags are independent of each
        // other, so overlapping triggers across tags are allowed. Phrases are
        // matched literally against the lowercased text.
        for (tag, phrases) in Vocabulary::global().triggers() {
            for phrase in phrases {
                if token_set.contains(phrase) || lowered.contains(phrase) {
                    keywords.push(tag.to_string());
                    break;
                }
            }
        }

        let matched: HashSet<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        let mut seen: HashSet<String> = HashSet::new();
        let significant = tokens
            .into_iter()
            .filter(|token| token.len() >= MIN_SIGNIFICANT_LEN)
            .filter(|token| !matched.contains(token.as_str()))
            .filter(|token| seen.insert(token.clone()))
            .take(MAX_SIGNIFICANT_TOKENS);
        keywords.extend(significant);

        keywords
    }

    /// Get the analyzer used by this extractor.
    pub fn analyzer(&self) -> &TextAnalyzer {
        &self.analyzer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_matches_tags() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract("I love coding and solving problems");
        assert!(keywords.iter().any(|k| k == "Coding"));
    }

    #[test]
    fn test_extract_multi_word_trigger() {
        let extractor = KeywordExtractor::new();
        // "video game" is split by tokenization; the substring pass catches it
        let keywords = extractor.extract("I play video game tournaments");
        assert!(keywords.iter().any(|k| k == "Video_Game"));
    }

    #[test]
    fn test_extract_is_deterministic() {
        let extractor = KeywordExtractor::new();
        let first = extractor.extract("art, music, and travelling fascinate me");
        let second = extractor.extract("art, music, and travelling fascinate me");
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_deduplicates() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract("coding coding coding programming");
        let unique: HashSet<&String> = keywords.iter().collect();
        assert_eq!(unique.len(), keywords.len());
    }

    #[test]
    fn test_extract_significant_tokens_capped() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract(
            "zebras giraffes elephants rhinoceros hippopotamus crocodiles antelopes buffaloes",
        );
        let non_tags: Vec<&String> = keywords
            .iter()
            .filter(|k| !Vocabulary::global().contains(k))
            .collect();
        assert!(non_tags.len() <= MAX_SIGNIFICANT_TOKENS);
    }

    #[test]
    fn test_extract_empty_text() {
        let extractor = KeywordExtractor::new();
        assert!(extractor.extract("").is_empty());
    }
}
