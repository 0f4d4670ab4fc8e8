//! Feature vector construction.
//!
//! A [`FeatureVector`] is a fixed-length binary vector over the interest
//! vocabulary, derived deterministically from a [`UserProfile`]. It is
//! ephemeral: recomputed on demand, never persisted.
//!
//! # Examples
//!
//! ```
//! use wayfinder::features::FeatureVector;
//! use wayfinder::profile::UserProfile;
//! use wayfinder::vocabulary::Vocabulary;
//!
//! let mut profile = UserProfile::new();
//! profile.set_selected_interests(vec!["Coding"]);
//!
//! let vector = FeatureVector::from_profile(&profile);
//! assert_eq!(vector.len(), Vocabulary::global().len());
//! assert!(!vector.is_empty_signal());
//! ```

use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;
use crate::vocabulary::Vocabulary;

/// Fixed-length binary vector over the interest vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: Vec<u8>,
}

impl FeatureVector {
    /// Build a vector from a profile.
    ///
    /// Selected interests and chat keywords that exactly equal a vocabulary
    /// tag set their index to 1. Free-form keywords that are not vocabulary
    /// tags, and unknown tag names, are silently ignored.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let vocabulary = Vocabulary::global();
        let mut values = vec![0u8; vocabulary.len()];

        for tag in profile
            .selected_interests
            .iter()
            .chain(profile.chat_keywords.iter())
        {
            if let Some(idx) = vocabulary.index_of(tag) {
                values[idx] = 1;
            }
        }

        FeatureVector { values }
    }

    /// The vector length; always the vocabulary size.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has zero length (it never does).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether every entry is zero, i.e. the profile carries no signal.
    pub fn is_empty_signal(&self) -> bool {
        self.values.iter().all(|&v| v == 0)
    }

    /// The raw 0/1 entries, indexed by vocabulary position.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Iterate the names of the active (set to 1) interest tags, in
    /// vocabulary order.
    pub fn active_tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        let vocabulary = Vocabulary::global();
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 1)
            .filter_map(move |(idx, _)| vocabulary.tag_at(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_length_and_binary_entries() {
        let mut profile = UserProfile::new();
        profile.set_selected_interests(vec!["Coding", "Drawing"]);
        profile.add_chat_keywords(vec!["Mathematics", "zebra"]);

        let vector = FeatureVector::from_profile(&profile);
        assert_eq!(vector.len(), Vocabulary::global().len());
        assert!(vector.values().iter().all(|&v| v <= 1));
    }

    #[test]
    fn test_selected_and_chat_tags_are_merged() {
        let mut profile = UserProfile::new();
        profile.set_selected_interests(vec!["Coding"]);
        profile.add_chat_keywords(vec!["Drawing"]);

        let vector = FeatureVector::from_profile(&profile);
        let active: Vec<_> = vector.active_tags().collect();
        assert_eq!(active, vec!["Drawing", "Coding"]);
    }

    #[test]
    fn test_unknown_tags_are_ignored() {
        let mut profile = UserProfile::new();
        profile.set_selected_interests(vec!["Skydiving", "garbage!!"]);
        profile.add_chat_keywords(vec!["coding"]); // lowercase, not an exact tag

        let vector = FeatureVector::from_profile(&profile);
        assert!(vector.is_empty_signal());
    }

    #[test]
    fn test_empty_profile_is_empty_signal() {
        let vector = FeatureVector::from_profile(&UserProfile::new());
        assert!(vector.is_empty_signal());
        assert_eq!(vector.len(), 59);
    }
}
