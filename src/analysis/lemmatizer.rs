//! Reduction of English words to dictionary base forms.
//!
//! This is a light noun-oriented lemmatizer: a small irregular-plural table
//! plus ordered suffix rules. It deliberately leaves verb inflections like
//! `-ing` untouched, since the interest vocabulary triggers ("coding",
//! "drawing", "teaching") are themselves gerunds.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Irregular plural forms that the suffix rules would mangle.
static IRREGULAR_NOUNS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("people", "person"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
    ])
});

/// Words ending in these suffixes keep their trailing `s`.
const KEEP_TRAILING_S: &[&str] = &["ss", "us", "is"];

/// A suffix-rule lemmatizer for English nouns.
#[derive(Debug, Clone, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    /// Create a new lemmatizer.
    pub fn new() -> Self {
        Lemmatizer
    }

    /// Reduce a lowercase word to its dictionary base form.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(base) = IRREGULAR_NOUNS.get(word) {
            return (*base).to_string();
        }

        // -sses/-ches/-shes/-xes/-zes -> strip "es"
        for suffix in ["sses", "ches", "shes", "xes", "zes"] {
            if word.ends_with(suffix) && word.len() > suffix.len() {
                return word[..word.len() - 2].to_string();
            }
        }

        // -ies -> -y ("hobbies" -> "hobby")
        if word.ends_with("ies") && word.len() > 4 {
            return format!("{}y", &word[..word.len() - 3]);
        }

        // plain plural, but not "business", "campus", "analysis"
        if word.ends_with('s')
            && word.len() > 3
            && !KEEP_TRAILING_S.iter().any(|s| word.ends_with(s))
        {
            return word[..word.len() - 1].to_string();
        }

        word.to_string()
    }

    /// Get the name of this lemmatizer.
    pub fn name(&self) -> &'static str {
        "noun_suffix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_plurals() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("problems"), "problem");
        assert_eq!(lemmatizer.lemmatize("tasks"), "task");
        assert_eq!(lemmatizer.lemmatize("numbers"), "number");
    }

    #[test]
    fn test_es_plurals() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("classes"), "class");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("branches"), "branch");
    }

    #[test]
    fn test_ies_plurals() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("hobbies"), "hobby");
        assert_eq!(lemmatizer.lemmatize("abilities"), "ability");
    }

    #[test]
    fn test_irregular_plurals() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("children"), "child");
        assert_eq!(lemmatizer.lemmatize("people"), "person");
    }

    #[test]
    fn test_preserved_words() {
        let lemmatizer = Lemmatizer::new();
        // keeps gerund triggers and -ss/-us/-is endings intact
        assert_eq!(lemmatizer.lemmatize("coding"), "coding");
        assert_eq!(lemmatizer.lemmatize("business"), "business");
        assert_eq!(lemmatizer.lemmatize("analysis"), "analysis");
        assert_eq!(lemmatizer.lemmatize("campus"), "campus");
    }
}
