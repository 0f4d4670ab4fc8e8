//! Question intent classification and entity extraction.
//!
//! Intent detection iterates a fixed, ordered list of `(intent, patterns)`
//! pairs and takes the first pair whose pattern matches the lowercased text.
//! The order of that list is a load-bearing tie-break: "what's the salary
//! for a nurse" mentions both salary and education-adjacent words, and the
//! salary rules must win because they come first. Do not reorder it.
//!
//! Entity extraction is a literal-containment scan over three fixed term
//! lists (careers, courses, skills), one pass per category.
//!
//! # Examples
//!
//! ```
//! use wayfinder::intent::{IntentClassifier, QuestionIntent};
//!
//! let classifier = IntentClassifier::new().unwrap();
//! let analysis = classifier.analyze("What's the salary for a software developer?");
//! assert_eq!(analysis.intent, QuestionIntent::Salary);
//! assert!(analysis.entities.careers.contains(&"software developer".to_string()));
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfinderError};

/// Ordered intent patterns. First match wins; order must be preserved.
const INTENT_PATTERNS: &[(QuestionIntent, &[&str])] = &[
    (
        QuestionIntent::Salary,
        &[
            r"salary|pay|earn|income|money|wage",
            r"how much.*make|how much.*earn|what.*pay",
        ],
    ),
    (
        QuestionIntent::Education,
        &[
            r"education|degree|study|learn|school|college|university",
            r"what.*study|how.*become|requirements",
        ],
    ),
    (
        QuestionIntent::Skills,
        &[
            r"skills|abilities|qualifications|competencies",
            r"what.*skills|need.*skills",
        ],
    ),
    (
        QuestionIntent::JobOutlook,
        &[
            r"outlook|future|growth|demand|opportunities",
            r"job.*market|career.*prospects",
        ],
    ),
    (
        QuestionIntent::WorkEnvironment,
        &[
            r"work.*environment|workplace|office|remote",
            r"where.*work|work.*conditions",
        ],
    ),
    (
        QuestionIntent::CareerComparison,
        &[
            r"compare|versus|vs|difference|better",
            r"which.*career|compare.*careers",
        ],
    ),
    (
        QuestionIntent::CourseInfo,
        &[
            r"course|program|curriculum|subjects",
            r"what.*course|which.*program",
        ],
    ),
    (
        QuestionIntent::IndustryTrends,
        &[
            r"trends|future|emerging|technology|innovation",
            r"industry.*trends|what.*happening",
        ],
    ),
];

/// Career names recognized in free text.
const CAREER_TERMS: &[&str] = &[
    "software developer",
    "data scientist",
    "nurse",
    "teacher",
    "doctor",
    "engineer",
    "manager",
    "analyst",
    "designer",
    "writer",
    "programmer",
    "developer",
    "marketing",
    "finance",
    "accounting",
    "psychology",
    "cybersecurity",
    "physical therapist",
    "graphic designer",
];

/// Course names recognized in free text.
const COURSE_TERMS: &[&str] = &[
    "computer science",
    "business administration",
    "nursing",
    "marketing",
    "engineering",
    "psychology",
    "medicine",
    "education",
    "finance",
    "graphic design",
    "journalism",
    "biology",
    "chemistry",
    "physics",
];

/// Skill names recognized in free text.
const SKILL_TERMS: &[&str] = &[
    "programming",
    "coding",
    "leadership",
    "communication",
    "analytical",
    "creative",
    "problem solving",
    "teamwork",
    "organization",
];

/// The classified purpose of a user question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionIntent {
    Salary,
    Education,
    Skills,
    JobOutlook,
    WorkEnvironment,
    CareerComparison,
    CourseInfo,
    IndustryTrends,
    General,
}

/// Career, course, and skill names recognized in a question.
///
/// All three lists are always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    pub careers: Vec<String>,
    pub courses: Vec<String>,
    pub skills: Vec<String>,
}

/// The result of analyzing one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionAnalysis {
    /// The detected intent.
    pub intent: QuestionIntent,
    /// Entities mentioned in the question.
    pub entities: Entities,
    /// The question as the user typed it.
    pub raw_text: String,
}

/// Pattern-based question intent classifier.
#[derive(Debug)]
pub struct IntentClassifier {
    patterns: Vec<(QuestionIntent, Vec<Regex>)>,
}

impl IntentClassifier {
    /// Create a classifier with the built-in intent patterns.
    pub fn new() -> Result<Self> {
        let mut patterns = Vec::with_capacity(INTENT_PATTERNS.len());
        for (intent, sources) in INTENT_PATTERNS {
            let compiled = sources
                .iter()
                .map(|source| {
                    Regex::new(source)
                        .map_err(|e| WayfinderError::intent(format!("bad pattern {source}: {e}")))
                })
                .collect::<Result<Vec<_>>>()?;
            patterns.push((*intent, compiled));
        }
        Ok(IntentClassifier { patterns })
    }

    /// Analyze a question: detect its intent and extract entities.
    pub fn analyze(&self, text: &str) -> QuestionAnalysis {
        let lowered = text.to_lowercase();

        let intent = self
            .patterns
            .iter()
            .find(|(_, regexes)| regexes.iter().any(|re| re.is_match(&lowered)))
            .map(|(intent, _)| *intent)
            .unwrap_or(QuestionIntent::General);

        QuestionAnalysis {
            intent,
            entities: extract_entities(&lowered),
            raw_text: text.to_string(),
        }
    }
}

/// Scan lowercased text for known career, course, and skill names.
fn extract_entities(lowered: &str) -> Entities {
    let contained = |terms: &[&str]| -> Vec<String> {
        terms
            .iter()
            .filter(|term| lowered.contains(*term))
            .map(|term| term.to_string())
            .collect()
    };

    Entities {
        careers: contained(CAREER_TERMS),
        courses: contained(COURSE_TERMS),
        skills: contained(SKILL_TERMS),
    }
}
