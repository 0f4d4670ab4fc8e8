//! Session-scoped user profile.
//!
//! A [`UserProfile`] accumulates what a session has learned about the user:
//! explicitly selected interest tags, keywords derived from chat text, the
//! most recent sentiment, and the most recent career-related term buckets.
//! It is created empty, updated on every chat turn or selection change, and
//! owned exclusively by one session.

use serde::{Deserialize, Serialize};

use crate::extract::sentiment::Sentiment;
use crate::extract::terms::CareerTerms;

/// Mutable, session-scoped record of user signals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Interest tags the user picked explicitly.
    pub selected_interests: Vec<String>,
    /// Keywords extracted from chat text, deduplicated, first-seen order.
    pub chat_keywords: Vec<String>,
    /// Sentiment of the most recent chat turn.
    pub sentiment: Sentiment,
    /// Career-related terms from the most recent chat turn.
    pub career_terms: CareerTerms,
}

impl UserProfile {
    /// Create an empty profile.
    pub fn new() -> Self {
        UserProfile::default()
    }

    /// Replace the explicitly selected interest tags.
    pub fn set_selected_interests<I, S>(&mut self, interests: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_interests = interests.into_iter().map(|s| s.into()).collect();
    }

    /// Toggle one explicitly selected interest tag.
    pub fn toggle_interest(&mut self, tag: &str) {
        if let Some(pos) = self.selected_interests.iter().position(|t| t == tag) {
            self.selected_interests.remove(pos);
        } else {
            self.selected_interests.push(tag.to_string());
        }
    }

    /// Merge newly extracted chat keywords, keeping first-seen order and
    /// dropping duplicates.
    pub fn add_chat_keywords<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for keyword in keywords {
            let keyword = keyword.into();
            if !self.chat_keywords.contains(&keyword) {
                self.chat_keywords.push(keyword);
            }
        }
    }

    /// Whether the profile holds no interest signal at all.
    pub fn is_empty(&self) -> bool {
        self.selected_interests.is_empty() && self.chat_keywords.is_empty()
    }

    /// Clear everything back to the freshly created state.
    pub fn clear(&mut self) {
        *self = UserProfile::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_dedup_preserves_order() {
        let mut profile = UserProfile::new();
        profile.add_chat_keywords(vec!["Coding", "music"]);
        profile.add_chat_keywords(vec!["music", "Drawing", "Coding"]);
        assert_eq!(profile.chat_keywords, vec!["Coding", "music", "Drawing"]);
    }

    #[test]
    fn test_toggle_interest() {
        let mut profile = UserProfile::new();
        profile.toggle_interest("Coding");
        assert_eq!(profile.selected_interests, vec!["Coding"]);
        profile.toggle_interest("Coding");
        assert!(profile.selected_interests.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut profile = UserProfile::new();
        profile.set_selected_interests(vec!["Coding"]);
        profile.add_chat_keywords(vec!["music"]);
        profile.sentiment = Sentiment::Positive;
        profile.clear();
        assert!(profile.is_empty());
        assert_eq!(profile.sentiment, Sentiment::Neutral);
    }
}
