//! Pluggable statistical predictor collaborators.
//!
//! The recommendation engine prefers a trained model when one is available
//! and falls back to its rule tables when none is. These traits are the
//! seam: a deployment can plug in real predictors, and their absence or
//! failure is never a hard error.

use std::sync::Arc;

use crate::error::Result;
use crate::features::FeatureVector;

/// Predicts a single course label from a feature vector.
pub trait CoursePredictor: Send + Sync {
    /// Predict the numeric course label for the given features.
    fn predict(&self, features: &FeatureVector) -> Result<usize>;
}

/// Decodes numeric course labels back to course names.
pub trait CourseDecoder: Send + Sync {
    /// The course name for a numeric label, if the label is known.
    fn decode(&self, label: usize) -> Option<String>;
}

/// Predicts per-label probabilities for the career multi-label model.
pub trait CareerPredictor: Send + Sync {
    /// Per-label probabilities, aligned by index with
    /// [`CareerLabels::labels`].
    fn predict(&self, features: &FeatureVector) -> Result<Vec<f64>>;
}

/// The ordered label names of the career multi-label model.
pub trait CareerLabels: Send + Sync {
    /// Label names aligned by index with the probability sequence.
    fn labels(&self) -> &[String];
}

/// Holds whichever model collaborators a deployment managed to load.
///
/// Every slot is optional; a missing slot means "model unavailable" and
/// routes the engine to its rule tables.
#[derive(Clone, Default)]
pub struct ModelStore {
    pub(crate) course_model: Option<Arc<dyn CoursePredictor>>,
    pub(crate) course_decoder: Option<Arc<dyn CourseDecoder>>,
    pub(crate) career_model: Option<Arc<dyn CareerPredictor>>,
    pub(crate) career_labels: Option<Arc<dyn CareerLabels>>,
}

impl ModelStore {
    /// A store with no models loaded; the rule tables are authoritative.
    pub fn empty() -> Self {
        ModelStore::default()
    }

    /// Attach a course predictor.
    pub fn with_course_model(mut self, model: Arc<dyn CoursePredictor>) -> Self {
        self.course_model = Some(model);
        self
    }

    /// Attach a course label decoder.
    pub fn with_course_decoder(mut self, decoder: Arc<dyn CourseDecoder>) -> Self {
        self.course_decoder = Some(decoder);
        self
    }

    /// Attach a career multi-label predictor.
    pub fn with_career_model(mut self, model: Arc<dyn CareerPredictor>) -> Self {
        self.career_model = Some(model);
        self
    }

    /// Attach the career label set.
    pub fn with_career_labels(mut self, labels: Arc<dyn CareerLabels>) -> Self {
        self.career_labels = Some(labels);
        self
    }

    /// Whether the course path has both a model and a decoder.
    pub fn has_course_model(&self) -> bool {
        self.course_model.is_some() && self.course_decoder.is_some()
    }

    /// Whether the career path has both a model and labels.
    pub fn has_career_model(&self) -> bool {
        self.career_model.is_some() && self.career_labels.is_some()
    }
}

impl std::fmt::Debug for ModelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelStore")
            .field("course_model", &self.course_model.is_some())
            .field("course_decoder", &self.course_decoder.is_some())
            .field("career_model", &self.career_model.is_some())
            .field("career_labels", &self.career_labels.is_some())
            .finish()
    }
}

/// A fixed, index-aligned label list.
#[derive(Debug, Clone)]
pub struct StaticLabels {
    labels: Vec<String>,
}

impl StaticLabels {
    /// Create a label list from names.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StaticLabels {
            labels: labels.into_iter().map(|s| s.into()).collect(),
        }
    }
}

impl CareerLabels for StaticLabels {
    fn labels(&self) -> &[String] {
        &self.labels
    }
}
