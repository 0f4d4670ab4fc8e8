//! The static career knowledge base.
//!
//! Read-only lookup tables for careers, courses, and industry trends, keyed
//! by normalized names (lowercase, spaces joined with underscores). The
//! tables are built once at first use and validated as they are built:
//! malformed entries are dropped with a warning so lookups never fail at
//! use time.
//!
//! # Examples
//!
//! ```
//! use wayfinder::knowledge::KnowledgeBase;
//!
//! let kb = KnowledgeBase::global();
//! let info = kb.career_info("software developer").unwrap();
//! assert!(!info.salary_range.is_empty());
//! assert!(kb.career_info("nonexistent job").is_none());
//! ```

mod data;

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Detailed information about one career.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecord {
    /// Industry category (technology, healthcare, ...).
    pub category: String,
    /// What the job involves.
    pub description: String,
    /// Skills the career requires.
    pub skills_required: Vec<String>,
    /// Typical salary range.
    pub salary_range: String,
    /// Education requirements.
    pub education: String,
    /// Job market outlook.
    pub job_outlook: String,
    /// Where and how the work happens.
    pub work_environment: String,
    /// Adjacent careers.
    pub related_careers: Vec<String>,
}

/// Detailed information about one course of study.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    /// What the course covers.
    pub description: String,
    /// Typical duration.
    pub duration: String,
    /// Core curriculum subjects.
    pub core_subjects: Vec<String>,
    /// Careers the course leads to.
    pub career_paths: Vec<String>,
    /// Admission requirements.
    pub admission_requirements: String,
    /// Top skills gained.
    pub skills_gained: Vec<String>,
}

/// A career matched by a skill search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatch {
    /// Display name of the career ("Software Developer").
    pub name: String,
    /// Industry category.
    pub category: String,
    /// Career description.
    pub description: String,
}

/// One row of a salary comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryComparison {
    /// The career as the caller named it.
    pub career: String,
    /// Its salary range.
    pub salary_range: String,
    /// Its job outlook.
    pub job_outlook: String,
}

/// The process-wide knowledge base instance.
static GLOBAL_KNOWLEDGE_BASE: LazyLock<KnowledgeBase> = LazyLock::new(KnowledgeBase::build);

/// Read-only knowledge base for careers, courses, and trends.
#[derive(Debug)]
pub struct KnowledgeBase {
    /// Careers keyed by normalized name, in table order.
    careers: Vec<(&'static str, CareerRecord)>,
    career_index: HashMap<&'static str, usize>,
    courses: HashMap<&'static str, CourseRecord>,
    trends: HashMap<&'static str, Vec<String>>,
}

impl KnowledgeBase {
    fn build() -> Self {
        let mut careers = Vec::new();
        let mut career_index = HashMap::new();
        for (key, record) in data::career_entries() {
            if key.is_empty() || record.salary_range.is_empty() || record.description.is_empty() {
                warn!(key, "dropping malformed career entry");
                continue;
            }
            if career_index.contains_key(key) {
                warn!(key, "dropping duplicate career entry");
                continue;
            }
            career_index.insert(key, careers.len());
            careers.push((key, record));
        }

        let mut courses = HashMap::new();
        for (key, record) in data::course_entries() {
            if key.is_empty() || record.duration.is_empty() {
                warn!(key, "dropping malformed course entry");
                continue;
            }
            courses.insert(key, record);
        }

        let mut trends = HashMap::new();
        for (key, bullets) in data::trend_entries() {
            if bullets.is_empty() {
                warn!(key, "dropping empty trend entry");
                continue;
            }
            trends.insert(key, bullets);
        }

        KnowledgeBase {
            careers,
            career_index,
            courses,
            trends,
        }
    }

    /// Get the process-wide knowledge base.
    pub fn global() -> &'static KnowledgeBase {
        &GLOBAL_KNOWLEDGE_BASE
    }

    /// Look up a career by free-form name ("software developer").
    pub fn career_info(&self, name: &str) -> Option<&CareerRecord> {
        let key = normalize_name(name);
        self.career_index
            .get(key.as_str())
            .map(|&idx| &self.careers[idx].1)
    }

    /// Look up a course by free-form name ("computer science").
    pub fn course_info(&self, name: &str) -> Option<&CourseRecord> {
        let key = normalize_name(name);
        self.courses.get(key.as_str())
    }

    /// Current trends for an industry; empty when the industry is unknown.
    pub fn industry_trends(&self, industry: &str) -> &[String] {
        self.trends
            .get(industry.to_lowercase().as_str())
            .map(|bullets| bullets.as_slice())
            .unwrap_or(&[])
    }

    /// Find careers whose required skills contain the given skill,
    /// case-insensitively, in table order.
    pub fn search_careers_by_skill(&self, skill: &str) -> Vec<SkillMatch> {
        let skill = skill.to_lowercase();
        self.careers
            .iter()
            .filter(|(_, record)| {
                record
                    .skills_required
                    .iter()
                    .any(|s| s.to_lowercase().contains(&skill))
            })
            .map(|(key, record)| SkillMatch {
                name: title_case(&key.replace('_', " ")),
                category: record.category.clone(),
                description: record.description.clone(),
            })
            .collect()
    }

    /// Compare salary and outlook across careers; unknown names are skipped.
    pub fn salary_comparison(&self, careers: &[String]) -> Vec<SalaryComparison> {
        careers
            .iter()
            .filter_map(|career| {
                self.career_info(career).map(|record| SalaryComparison {
                    career: career.clone(),
                    salary_range: record.salary_range.clone(),
                    job_outlook: record.job_outlook.clone(),
                })
            })
            .collect()
    }
}

/// Normalize a free-form name into a lookup key: lowercase, spaces joined
/// with underscores.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Capitalize the first letter of every word.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_career_info_hit() {
        let kb = KnowledgeBase::global();
        let info = kb.career_info("software developer").unwrap();
        assert!(!info.salary_range.is_empty());
        assert_eq!(info.category, "technology");
    }

    #[test]
    fn test_career_info_miss() {
        let kb = KnowledgeBase::global();
        assert!(kb.career_info("nonexistent job").is_none());
    }

    #[test]
    fn test_course_info() {
        let kb = KnowledgeBase::global();
        let info = kb.course_info("computer science").unwrap();
        assert_eq!(info.duration, "4 years (Bachelor's)");
        assert!(kb.course_info("basket weaving").is_none());
    }

    #[test]
    fn test_industry_trends() {
        let kb = KnowledgeBase::global();
        assert_eq!(kb.industry_trends("technology").len(), 5);
        assert!(kb.industry_trends("Technology").len() > 0);
        assert!(kb.industry_trends("agriculture").is_empty());
    }

    #[test]
    fn test_search_careers_by_skill() {
        let kb = KnowledgeBase::global();
        let matches = kb.search_careers_by_skill("programming");
        assert!(matches.iter().any(|m| m.name == "Software Developer"));

        // "communication" appears in several careers' skill lists
        let matches = kb.search_careers_by_skill("communication");
        assert!(matches.len() >= 2);
    }

    #[test]
    fn test_salary_comparison_skips_unknown() {
        let kb = KnowledgeBase::global();
        let comparison = kb.salary_comparison(&[
            "marketing manager".to_string(),
            "financial analyst".to_string(),
            "dragon tamer".to_string(),
        ]);
        assert_eq!(comparison.len(), 2);
        assert!(!comparison[0].salary_range.is_empty());
        assert!(!comparison[1].job_outlook.is_empty());
    }

    #[test]
    fn test_normalize_and_title_case() {
        assert_eq!(normalize_name("Software Developer"), "software_developer");
        assert_eq!(title_case("software developer"), "Software Developer");
    }
}
