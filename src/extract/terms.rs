//! Career-related term buckets.
//!
//! Scans the normalized token stream against five fixed category word lists
//! (skills, interests, experience, education, goals). Categories are scanned
//! independently, so a word may land in more than one bucket. Every category
//! is always present in the result, possibly empty.

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::TextAnalyzer;

/// The fixed term categories in scan order.
const CATEGORY_WORDS: &[(TermCategory, &[&str])] = &[
    (
        TermCategory::Skills,
        &["skill", "ability", "talent", "expertise", "competency", "proficiency"],
    ),
    (
        TermCategory::Interests,
        &["interest", "passion", "hobby", "enjoy", "love", "like"],
    ),
    (
        TermCategory::Experience,
        &["experience", "worked", "job", "internship", "volunteer", "project"],
    ),
    (
        TermCategory::Education,
        &["degree", "study", "major", "course", "school", "college", "university"],
    ),
    (
        TermCategory::Goals,
        &["want", "goal", "aspire", "dream", "hope", "plan", "future"],
    ),
];

/// A career-related term category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermCategory {
    Skills,
    Interests,
    Experience,
    Education,
    Goals,
}

/// Matched words per category. All five buckets are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerTerms {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub goals: Vec<String>,
}

impl CareerTerms {
    /// The bucket for a category.
    pub fn bucket(&self, category: TermCategory) -> &[String] {
        match category {
            TermCategory::Skills => &self.skills,
            TermCategory::Interests => &self.interests,
            TermCategory::Experience => &self.experience,
            TermCategory::Education => &self.education,
            TermCategory::Goals => &self.goals,
        }
    }

    fn bucket_mut(&mut self, category: TermCategory) -> &mut Vec<String> {
        match category {
            TermCategory::Skills => &mut self.skills,
            TermCategory::Interests => &mut self.interests,
            TermCategory::Experience => &mut self.experience,
            TermCategory::Education => &mut self.education,
            TermCategory::Goals => &mut self.goals,
        }
    }

    /// Whether no category matched anything.
    pub fn is_empty(&self) -> bool {
        CATEGORY_WORDS
            .iter()
            .all(|(category, _)| self.bucket(*category).is_empty())
    }
}

/// Extracts career-related terms from text.
#[derive(Debug, Clone, Default)]
pub struct TermExtractor {
    analyzer: TextAnalyzer,
}

impl TermExtractor {
    /// Create a new term extractor.
    pub fn new() -> Self {
        TermExtractor {
            analyzer: TextAnalyzer::new(),
        }
    }

    /// Scan the text against every category word list.
    pub fn career_terms(&self, text: &str) -> CareerTerms {
        let tokens = self.analyzer.analyze(text);
        let mut terms = CareerTerms::default();

        for (category, words) in CATEGORY_WORDS {
            let matched = tokens
                .iter()
                .filter(|t| words.contains(&t.as_str()))
                .cloned();
            terms.bucket_mut(*category).extend(matched);
        }

        terms
    }
}
