//! Course and career recommendation.
//!
//! The engine builds a feature vector from the profile, prefers a pluggable
//! statistical predictor when one is loaded, and otherwise runs deterministic
//! rule tables. Its public contract never fails: an empty profile yields the
//! "need more input" sentinel, a missing or broken collaborator yields the
//! rule tables, and an unexpected internal error yields a fixed fallback
//! recommendation. Failure handling lives at the outer boundary of the
//! component, not scattered through it.
//!
//! # Examples
//!
//! ```
//! use wayfinder::profile::UserProfile;
//! use wayfinder::recommend::RecommendEngine;
//!
//! let engine = RecommendEngine::new();
//! let mut profile = UserProfile::new();
//! profile.set_selected_interests(vec!["Coding"]);
//!
//! let recommendation = engine.recommend(&profile);
//! assert_eq!(recommendation.course, "B.Tech Computer Science Engineering");
//! assert!(recommendation.careers.iter().any(|c| c == "Software Developer"));
//! ```

pub mod model;

pub use model::*;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::WayfinderError;
use crate::features::FeatureVector;
use crate::profile::UserProfile;

/// Probability threshold for the multi-label career model.
const CAREER_PROBABILITY_THRESHOLD: f64 = 0.5;

/// Labels rescued when nothing clears the threshold.
const CAREER_TOP_N_RESCUE: usize = 3;

/// Maximum number of recommended careers.
const MAX_CAREERS: usize = 5;

/// Sentinel course text for an empty profile.
const NEED_MORE_INPUT_COURSE: &str =
    "Please provide more information about your interests to get personalized recommendations.";

/// Sentinel career text for an empty profile.
const NEED_MORE_INPUT_CAREER: &str =
    "Share your skills and hobbies to discover suitable career paths!";

/// Course returned when recommendation fails unexpectedly.
const FALLBACK_COURSE: &str = "Liberal Arts - A flexible program to explore various fields";

/// Careers returned when recommendation fails unexpectedly.
const FALLBACK_CAREERS: &[&str] = &[
    "Career Counselor - Help others find their path",
    "Project Manager - Coordinate diverse projects",
    "Research Analyst - Investigate various topics",
    "Consultant - Provide expertise across fields",
];

/// Ordered course rules: the first group with an active tag wins.
const COURSE_RULES: &[(&[&str], &str)] = &[
    (
        &["Coding", "Computer_Parts", "Mathematics"],
        "B.Tech Computer Science Engineering",
    ),
    (
        &["Drawing", "Designing", "Crafting"],
        "BFD- Bachelor of Fashion Designing",
    ),
    (
        &["Economics", "Accounting", "Business_Education"],
        "BBA- Bachelor of Business Administration",
    ),
    (
        &["Content_Writing", "Literature", "Reading", "Debating"],
        "BJMC- Bachelor of Journalism and Mass Communication",
    ),
    (
        &["Teaching", "Psychology", "Sociology"],
        "B.Ed- Bachelor of Education",
    ),
];

/// Course returned when no course rule matches.
const DEFAULT_COURSE: &str =
    "Liberal Arts Program - Explore your interests across multiple disciplines";

/// Ordered career groups: every group with an active tag contributes.
const CAREER_RULES: &[(&[&str], &[&str])] = &[
    (
        &["Coding", "Computer_Parts"],
        &["Software Developer", "Data Scientist", "Systems Analyst"],
    ),
    (
        &["Drawing", "Designing"],
        &["Graphic Designer", "UI/UX Designer", "Art Director"],
    ),
    (
        &["Economics", "Accounting"],
        &["Financial Analyst", "Accountant", "Business Consultant"],
    ),
    (
        &["Content_Writing", "Literature"],
        &["Content Writer", "Journalist", "Editor"],
    ),
    (
        &["Teaching", "Psychology"],
        &["Teacher", "Counselor", "Training Specialist"],
    ),
];

/// Careers returned when no career group matches.
const DEFAULT_CAREERS: &[&str] = &[
    "Career Counselor",
    "Project Manager",
    "Research Analyst",
    "Consultant",
];

/// Which path produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    /// The profile carried no interest signal.
    NeedMoreInput,
    /// Both course and careers came from statistical models.
    Model,
    /// Both course and careers came from the rule tables.
    Rules,
    /// One path used a model, the other the rule tables.
    Mixed,
    /// An unexpected internal error was converted to the fixed fallback.
    Fallback,
}

/// A course plus up to five career suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// The recommended course of study.
    pub course: String,
    /// Ranked career suggestions, at most five.
    pub careers: Vec<String>,
    /// Which path produced this recommendation.
    pub source: RecommendationSource,
}

/// Outcome of one model-backed prediction stage.
enum ModelOutcome<T> {
    /// The collaborator produced a usable value.
    Predicted(T),
    /// No collaborator is loaded for this stage.
    Unavailable,
    /// The collaborator is loaded but failed.
    Failed(WayfinderError),
}

/// The recommendation engine.
#[derive(Debug, Clone, Default)]
pub struct RecommendEngine {
    models: ModelStore,
}

impl RecommendEngine {
    /// Create an engine with no model collaborators; the rule tables are
    /// authoritative.
    pub fn new() -> Self {
        RecommendEngine {
            models: ModelStore::empty(),
        }
    }

    /// Create an engine with the given model collaborators.
    pub fn with_models(models: ModelStore) -> Self {
        RecommendEngine { models }
    }

    /// Produce a recommendation for the profile.
    ///
    /// This never fails. Internal errors are converted to the fixed
    /// fallback recommendation at this boundary.
    pub fn recommend(&self, profile: &UserProfile) -> Recommendation {
        let vector = FeatureVector::from_profile(profile);

        if vector.is_empty_signal() {
            debug!("profile carries no interest signal, returning prompt");
            return Recommendation {
                course: NEED_MORE_INPUT_COURSE.to_string(),
                careers: vec![NEED_MORE_INPUT_CAREER.to_string()],
                source: RecommendationSource::NeedMoreInput,
            };
        }

        let (course, course_from_model) = match self.predict_course(&vector) {
            ModelOutcome::Predicted(course) => (course, true),
            ModelOutcome::Unavailable => (rule_course(&vector), false),
            ModelOutcome::Failed(e) => {
                warn!(error = %e, "course model failed, using rule table");
                (rule_course(&vector), false)
            }
        };

        let (careers, careers_from_model) = match self.predict_careers(&vector) {
            ModelOutcome::Predicted(careers) => (careers, true),
            ModelOutcome::Unavailable => (rule_careers(&vector), false),
            ModelOutcome::Failed(e) => {
                warn!(error = %e, "career model failed, using rule table");
                (rule_careers(&vector), false)
            }
        };

        let source = match (course_from_model, careers_from_model) {
            (true, true) => RecommendationSource::Model,
            (false, false) => RecommendationSource::Rules,
            _ => RecommendationSource::Mixed,
        };

        Recommendation {
            course,
            careers,
            source,
        }
    }

    /// The fixed fallback for unexpected failures. Public so the chat layer
    /// can reuse it as a last resort.
    pub fn fallback() -> Recommendation {
        Recommendation {
            course: FALLBACK_COURSE.to_string(),
            careers: FALLBACK_CAREERS.iter().map(|c| c.to_string()).collect(),
            source: RecommendationSource::Fallback,
        }
    }

    fn predict_course(&self, vector: &FeatureVector) -> ModelOutcome<String> {
        let (Some(model), Some(decoder)) = (
            self.models.course_model.as_ref(),
            self.models.course_decoder.as_ref(),
        ) else {
            return ModelOutcome::Unavailable;
        };

        let label = match model.predict(vector) {
            Ok(label) => label,
            Err(e) => return ModelOutcome::Failed(e),
        };

        match decoder.decode(label) {
            Some(course) => ModelOutcome::Predicted(course),
            None => ModelOutcome::Failed(WayfinderError::model(format!(
                "course decoder has no name for label {label}"
            ))),
        }
    }

    fn predict_careers(&self, vector: &FeatureVector) -> ModelOutcome<Vec<String>> {
        let (Some(model), Some(labels)) = (
            self.models.career_model.as_ref(),
            self.models.career_labels.as_ref(),
        ) else {
            return ModelOutcome::Unavailable;
        };

        let probabilities = match model.predict(vector) {
            Ok(probabilities) => probabilities,
            Err(e) => return ModelOutcome::Failed(e),
        };
        if probabilities.is_empty() {
            return ModelOutcome::Failed(WayfinderError::model("career model produced no output"));
        }

        let names = labels.labels();
        let mut careers: Vec<String> = probabilities
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p > CAREER_PROBABILITY_THRESHOLD)
            .filter_map(|(i, _)| names.get(i).cloned())
            .collect();

        if careers.is_empty() {
            // nothing cleared the threshold; rescue the top labels instead
            let mut indexed: Vec<(usize, f64)> =
                probabilities.iter().copied().enumerate().collect();
            indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
            careers = indexed
                .into_iter()
                .take(CAREER_TOP_N_RESCUE)
                .filter_map(|(i, _)| names.get(i).cloned())
                .collect();
        }

        careers.truncate(MAX_CAREERS);
        ModelOutcome::Predicted(careers)
    }
}

/// Rule-table course recommendation: first matching group wins.
fn rule_course(vector: &FeatureVector) -> String {
    let active: Vec<&str> = vector.active_tags().collect();

    for (tags, course) in COURSE_RULES {
        if tags.iter().any(|tag| active.contains(tag)) {
            return course.to_string();
        }
    }

    DEFAULT_COURSE.to_string()
}

/// Rule-table career recommendation: every matching group contributes, in
/// group order, capped at five.
fn rule_careers(vector: &FeatureVector) -> Vec<String> {
    let active: Vec<&str> = vector.active_tags().collect();

    let mut careers = Vec::new();
    for (tags, group) in CAREER_RULES {
        if tags.iter().any(|tag| active.contains(tag)) {
            careers.extend(group.iter().map(|c| c.to_string()));
        }
    }

    if careers.is_empty() {
        careers = DEFAULT_CAREERS.iter().map(|c| c.to_string()).collect();
    }

    careers.truncate(MAX_CAREERS);
    careers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use std::sync::Arc;

    struct FixedCoursePredictor(usize);

    impl CoursePredictor for FixedCoursePredictor {
        fn predict(&self, _features: &FeatureVector) -> Result<usize> {
            Ok(self.0)
        }
    }

    struct FailingCoursePredictor;

    impl CoursePredictor for FailingCoursePredictor {
        fn predict(&self, _features: &FeatureVector) -> Result<usize> {
            Err(WayfinderError::model("simulated failure"))
        }
    }

    struct FixedDecoder;

    impl CourseDecoder for FixedDecoder {
        fn decode(&self, label: usize) -> Option<String> {
            match label {
                0 => Some("B.Sc Physics".to_string()),
                _ => None,
            }
        }
    }

    struct FixedCareerPredictor(Vec<f64>);

    impl CareerPredictor for FixedCareerPredictor {
        fn predict(&self, _features: &FeatureVector) -> Result<Vec<f64>> {
            Ok(self.0.clone())
        }
    }

    fn coding_profile() -> UserProfile {
        let mut profile = UserProfile::new();
        profile.set_selected_interests(vec!["Coding"]);
        profile
    }

    #[test]
    fn test_empty_profile_returns_sentinel() {
        let engine = RecommendEngine::new();
        let recommendation = engine.recommend(&UserProfile::new());
        assert_eq!(recommendation.source, RecommendationSource::NeedMoreInput);
        assert_eq!(recommendation.course, NEED_MORE_INPUT_COURSE);
        assert_eq!(recommendation.careers, vec![NEED_MORE_INPUT_CAREER]);
    }

    #[test]
    fn test_rule_course_for_coding() {
        let engine = RecommendEngine::new();
        let recommendation = engine.recommend(&coding_profile());
        assert_eq!(recommendation.course, "B.Tech Computer Science Engineering");
        assert!(
            recommendation
                .careers
                .iter()
                .any(|c| c == "Software Developer")
        );
        assert_eq!(recommendation.source, RecommendationSource::Rules);
    }

    #[test]
    fn test_rule_course_chain_order() {
        // both writing and teaching tags are active; the writing group
        // comes first in the chain
        let mut profile = UserProfile::new();
        profile.set_selected_interests(vec!["Teaching", "Literature"]);
        let recommendation = RecommendEngine::new().recommend(&profile);
        assert_eq!(
            recommendation.course,
            "BJMC- Bachelor of Journalism and Mass Communication"
        );
    }

    #[test]
    fn test_careers_capped_at_five() {
        let mut profile = UserProfile::new();
        profile.set_selected_interests(vec!["Coding", "Drawing", "Economics", "Teaching"]);
        let recommendation = RecommendEngine::new().recommend(&profile);
        assert_eq!(recommendation.careers.len(), MAX_CAREERS);
    }

    #[test]
    fn test_garbage_profile_never_panics() {
        let mut profile = UserProfile::new();
        profile.set_selected_interests(vec!["NotATag", "💥", ""]);
        profile.add_chat_keywords(vec!["also not a tag"]);
        let recommendation = RecommendEngine::new().recommend(&profile);
        assert_eq!(recommendation.source, RecommendationSource::NeedMoreInput);
        assert!(recommendation.careers.len() <= MAX_CAREERS);
    }

    #[test]
    fn test_default_careers_when_no_group_matches() {
        let mut profile = UserProfile::new();
        profile.set_selected_interests(vec!["Astrology"]);
        let recommendation = RecommendEngine::new().recommend(&profile);
        assert_eq!(recommendation.careers.len(), 4);
        assert!(recommendation.careers.iter().any(|c| c == "Career Counselor"));
    }

    #[test]
    fn test_model_course_path() {
        let models = ModelStore::empty()
            .with_course_model(Arc::new(FixedCoursePredictor(0)))
            .with_course_decoder(Arc::new(FixedDecoder));
        let engine = RecommendEngine::with_models(models);
        let recommendation = engine.recommend(&coding_profile());
        assert_eq!(recommendation.course, "B.Sc Physics");
        assert_eq!(recommendation.source, RecommendationSource::Mixed);
    }

    #[test]
    fn test_failing_model_falls_back_to_rules() {
        let models = ModelStore::empty()
            .with_course_model(Arc::new(FailingCoursePredictor))
            .with_course_decoder(Arc::new(FixedDecoder));
        let engine = RecommendEngine::with_models(models);
        let recommendation = engine.recommend(&coding_profile());
        assert_eq!(recommendation.course, "B.Tech Computer Science Engineering");
        assert_eq!(recommendation.source, RecommendationSource::Rules);
    }

    #[test]
    fn test_undecodable_label_falls_back_to_rules() {
        let models = ModelStore::empty()
            .with_course_model(Arc::new(FixedCoursePredictor(99)))
            .with_course_decoder(Arc::new(FixedDecoder));
        let engine = RecommendEngine::with_models(models);
        let recommendation = engine.recommend(&coding_profile());
        assert_eq!(recommendation.course, "B.Tech Computer Science Engineering");
    }

    #[test]
    fn test_career_model_threshold() {
        let models = ModelStore::empty()
            .with_career_model(Arc::new(FixedCareerPredictor(vec![0.9, 0.2, 0.7])))
            .with_career_labels(Arc::new(StaticLabels::new(vec![
                "Software Developer",
                "Teacher",
                "Data Scientist",
            ])));
        let engine = RecommendEngine::with_models(models);
        let recommendation = engine.recommend(&coding_profile());
        assert_eq!(
            recommendation.careers,
            vec!["Software Developer", "Data Scientist"]
        );
    }

    #[test]
    fn test_career_model_top_n_rescue() {
        // nothing clears 0.5, so the three most probable labels are taken
        let models = ModelStore::empty()
            .with_career_model(Arc::new(FixedCareerPredictor(vec![0.1, 0.4, 0.3, 0.2])))
            .with_career_labels(Arc::new(StaticLabels::new(vec![
                "Editor",
                "Teacher",
                "Counselor",
                "Journalist",
            ])));
        let engine = RecommendEngine::with_models(models);
        let recommendation = engine.recommend(&coding_profile());
        assert_eq!(recommendation.careers, vec!["Teacher", "Counselor", "Journalist"]);
    }

    #[test]
    fn test_fallback_shape() {
        let fallback = RecommendEngine::fallback();
        assert_eq!(fallback.source, RecommendationSource::Fallback);
        assert_eq!(fallback.careers.len(), 4);
    }
}
