//! Answer composition over the knowledge base.
//!
//! [`AnswerEngine`] turns a [`QuestionAnalysis`] into a textual answer by
//! dispatching on the detected intent and the entities present, in a fixed
//! precedence: salary, education, skills, job outlook, work environment,
//! comparison (needs two careers), course info, industry trends, then a
//! skills-based career search, then the general guidance text. Unknown
//! names are skipped, never errors; the engine always returns a non-empty
//! string.

use tracing::debug;

use crate::enrich::{self, TextFetcher};
use crate::intent::{QuestionAnalysis, QuestionIntent};
use crate::knowledge::{KnowledgeBase, title_case};

/// Career-keyed answers cover at most this many careers.
const MAX_ANSWER_CAREERS: usize = 3;

/// Course answers cover at most this many courses.
const MAX_ANSWER_COURSES: usize = 3;

/// Trend answers show this many bullets per industry.
const MAX_TREND_BULLETS: usize = 3;

/// Skill searches show at most this many careers.
const MAX_SKILL_MATCHES: usize = 5;

/// Industries the trends answer always covers, in order.
const TREND_INDUSTRIES: &[&str] = &["technology", "healthcare", "business", "education"];

/// Composes textual answers from classified questions.
#[derive(Debug, Clone, Default)]
pub struct AnswerEngine;

impl AnswerEngine {
    /// Create a new answer engine.
    pub fn new() -> Self {
        AnswerEngine
    }

    /// Compose an answer for the analyzed question.
    pub fn answer(&self, analysis: &QuestionAnalysis) -> String {
        let kb = KnowledgeBase::global();
        let entities = &analysis.entities;
        debug!(intent = ?analysis.intent, "composing answer");

        match analysis.intent {
            QuestionIntent::Salary if !entities.careers.is_empty() => {
                self.answer_salary(kb, &entities.careers)
            }
            QuestionIntent::Education if !entities.careers.is_empty() => {
                self.answer_education(kb, &entities.careers)
            }
            QuestionIntent::Skills if !entities.careers.is_empty() => {
                self.answer_skills(kb, &entities.careers)
            }
            QuestionIntent::JobOutlook if !entities.careers.is_empty() => {
                self.answer_job_outlook(kb, &entities.careers)
            }
            QuestionIntent::WorkEnvironment if !entities.careers.is_empty() => {
                self.answer_work_environment(kb, &entities.careers)
            }
            QuestionIntent::CareerComparison if entities.careers.len() >= 2 => {
                self.answer_comparison(kb, &entities.careers)
            }
            QuestionIntent::CourseInfo if !entities.courses.is_empty() => {
                self.answer_courses(kb, &entities.courses)
            }
            QuestionIntent::IndustryTrends => self.answer_trends(kb),
            _ if !entities.skills.is_empty() => self.answer_skill_search(kb, &entities.skills),
            _ => general_guidance().to_string(),
        }
    }

    /// Compose an answer and append best-effort web enrichment.
    ///
    /// Enrichment failures of any kind leave the base answer unchanged.
    pub fn answer_enriched(&self, analysis: &QuestionAnalysis, fetcher: &dyn TextFetcher) -> String {
        let base = self.answer(analysis);
        match enrich::enrichment_for(&analysis.raw_text, fetcher) {
            Some(extra) => format!("{base}\n\n**Additional Current Information:**\n{extra}"),
            None => base,
        }
    }

    fn answer_salary(&self, kb: &KnowledgeBase, careers: &[String]) -> String {
        let mut response =
            String::from("Here's salary information for the careers you asked about:\n\n");

        for career in careers.iter().take(MAX_ANSWER_CAREERS) {
            if let Some(info) = kb.career_info(career) {
                response.push_str(&format!("**{}:**\n", title_case(career)));
                response.push_str(&format!("• Salary Range: {}\n", info.salary_range));
                response.push_str(&format!("• Job Outlook: {}\n\n", info.job_outlook));
            }
        }

        response.push_str(
            "Salaries can vary based on location, experience, education, and company size.",
        );
        response
    }

    fn answer_education(&self, kb: &KnowledgeBase, careers: &[String]) -> String {
        let mut response = String::from("Here are the education requirements:\n\n");

        for career in careers.iter().take(MAX_ANSWER_CAREERS) {
            if let Some(info) = kb.career_info(career) {
                response.push_str(&format!("**{}:**\n", title_case(career)));
                response.push_str(&format!("• Education: {}\n", info.education));
                response.push_str(&format!(
                    "• Key Skills: {}\n\n",
                    info.skills_required
                        .iter()
                        .take(5)
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
            }
        }

        response
    }

    fn answer_skills(&self, kb: &KnowledgeBase, careers: &[String]) -> String {
        let mut response = String::from("Here are the key skills needed:\n\n");

        for career in careers.iter().take(MAX_ANSWER_CAREERS) {
            if let Some(info) = kb.career_info(career) {
                response.push_str(&format!("**{}:**\n", title_case(career)));
                response.push_str(&format!(
                    "• Required Skills: {}\n",
                    info.skills_required.join(", ")
                ));
                response.push_str(&format!(
                    "• Work Environment: {}\n\n",
                    info.work_environment
                ));
            }
        }

        response
    }

    fn answer_job_outlook(&self, kb: &KnowledgeBase, careers: &[String]) -> String {
        let mut response = String::from("Here's the job market outlook:\n\n");

        for career in careers.iter().take(MAX_ANSWER_CAREERS) {
            if let Some(info) = kb.career_info(career) {
                response.push_str(&format!("**{}:**\n", title_case(career)));
                response.push_str(&format!("• Job Outlook: {}\n", info.job_outlook));
                response.push_str(&format!(
                    "• Related Careers: {}\n\n",
                    info.related_careers
                        .iter()
                        .take(3)
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
            }
        }

        response
    }

    fn answer_work_environment(&self, kb: &KnowledgeBase, careers: &[String]) -> String {
        let mut response = String::from("Here's information about work environments:\n\n");

        for career in careers.iter().take(MAX_ANSWER_CAREERS) {
            if let Some(info) = kb.career_info(career) {
                response.push_str(&format!("**{}:**\n", title_case(career)));
                response.push_str(&format!("• Work Environment: {}\n", info.work_environment));
                response.push_str(&format!(
                    "• Description: {}...\n\n",
                    truncate_chars(&info.description, 150)
                ));
            }
        }

        response
    }

    fn answer_comparison(&self, kb: &KnowledgeBase, careers: &[String]) -> String {
        let mut response = String::from("Here's a comparison of these careers:\n\n");

        let limited: Vec<String> = careers.iter().take(MAX_ANSWER_CAREERS).cloned().collect();
        for row in kb.salary_comparison(&limited) {
            response.push_str(&format!("**{}:**\n", title_case(&row.career)));
            response.push_str(&format!("• Salary: {}\n", row.salary_range));
            response.push_str(&format!("• Outlook: {}\n\n", row.job_outlook));
        }

        response
    }

    fn answer_courses(&self, kb: &KnowledgeBase, courses: &[String]) -> String {
        let mut response = String::from("Here's information about these courses:\n\n");

        for course in courses.iter().take(MAX_ANSWER_COURSES) {
            if let Some(info) = kb.course_info(course) {
                response.push_str(&format!("**{}:**\n", title_case(course)));
                response.push_str(&format!("• Duration: {}\n", info.duration));
                response.push_str(&format!(
                    "• Core Subjects: {}\n",
                    info.core_subjects
                        .iter()
                        .take(5)
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
                response.push_str(&format!(
                    "• Career Paths: {}\n\n",
                    info.career_paths
                        .iter()
                        .take(4)
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
            }
        }

        response
    }

    fn answer_trends(&self, kb: &KnowledgeBase) -> String {
        let mut response = String::from("Here are current industry trends:\n\n");

        for industry in TREND_INDUSTRIES {
            let trends = kb.industry_trends(industry);
            if trends.is_empty() {
                continue;
            }
            response.push_str(&format!("**{} Industry:**\n", title_case(industry)));
            for trend in trends.iter().take(MAX_TREND_BULLETS) {
                response.push_str(&format!("• {trend}\n"));
            }
            response.push('\n');
        }

        response
    }

    fn answer_skill_search(&self, kb: &KnowledgeBase, skills: &[String]) -> String {
        let mut response = String::from("Based on your skills, here are suitable careers:\n\n");

        // union across skills, deduplicated by name, first-seen order
        let mut seen = Vec::new();
        for skill in skills {
            for matched in kb.search_careers_by_skill(skill) {
                if seen.iter().any(|m: &crate::knowledge::SkillMatch| m.name == matched.name) {
                    continue;
                }
                seen.push(matched);
            }
        }

        for matched in seen.iter().take(MAX_SKILL_MATCHES) {
            response.push_str(&format!("**{}:**\n", matched.name));
            response.push_str(&format!("• Category: {}\n", title_case(&matched.category)));
            response.push_str(&format!(
                "• Description: {}...\n\n",
                truncate_chars(&matched.description, 120)
            ));
        }

        response
    }
}

/// Truncate to at most `max` characters on a char boundary.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// The fixed general guidance text.
fn general_guidance() -> &'static str {
    "I can help you with career questions! Here are some topics I can assist with:\n\n\
     **Career Information:**\n\
     • Salary ranges and job outlook\n\
     • Education requirements and skills needed\n\
     • Work environments and job responsibilities\n\
     • Career comparisons and alternatives\n\n\
     **Course Guidance:**\n\
     • Program details and duration\n\
     • Core subjects and curriculum\n\
     • Career paths after graduation\n\
     • Admission requirements\n\n\
     **Industry Insights:**\n\
     • Current trends and future outlook\n\
     • Emerging opportunities\n\
     • Skills in demand\n\n\
     Feel free to ask specific questions like:\n\
     • \"What's the salary for a software developer?\"\n\
     • \"What education do I need to become a nurse?\"\n\
     • \"Compare marketing manager vs financial analyst\"\n\
     • \"What are the trends in technology industry?\"\n\n\
     How can I help you with your career exploration?"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::TextFetcher;
    use crate::error::{Result, WayfinderError};
    use crate::intent::IntentClassifier;

    fn analyze(text: &str) -> QuestionAnalysis {
        IntentClassifier::new().unwrap().analyze(text)
    }

    #[test]
    fn test_salary_answer() {
        let engine = AnswerEngine::new();
        let answer = engine.answer(&analyze("What's the salary for a software developer?"));
        assert!(answer.contains("Software Developer"));
        assert!(answer.contains("$65,000 - $150,000+ annually"));
    }

    #[test]
    fn test_unknown_career_is_skipped() {
        let engine = AnswerEngine::new();
        // "doctor" matches an entity term but has no knowledge-base entry
        let answer = engine.answer(&analyze("What's the salary for a doctor?"));
        assert!(answer.starts_with("Here's salary information"));
        assert!(!answer.contains("• Salary Range"));
    }

    #[test]
    fn test_comparison_answer() {
        let engine = AnswerEngine::new();
        let analysis = QuestionAnalysis {
            intent: crate::intent::QuestionIntent::CareerComparison,
            entities: crate::intent::Entities {
                careers: vec![
                    "marketing manager".to_string(),
                    "financial analyst".to_string(),
                ],
                courses: vec![],
                skills: vec![],
            },
            raw_text: "compare marketing manager vs financial analyst".to_string(),
        };
        let answer = engine.answer(&analysis);
        assert!(answer.contains("Marketing Manager"));
        assert!(answer.contains("Financial Analyst"));
        assert!(answer.matches("• Salary:").count() == 2);
    }

    #[test]
    fn test_trends_answer_covers_fixed_industries() {
        let engine = AnswerEngine::new();
        let answer = engine.answer(&analyze("What are the trends in technology industry?"));
        for industry in ["Technology", "Healthcare", "Business", "Education"] {
            assert!(answer.contains(&format!("**{industry} Industry:**")));
        }
    }

    #[test]
    fn test_course_answer() {
        let engine = AnswerEngine::new();
        let answer = engine.answer(&analyze("Which program should I pick, computer science?"));
        assert!(answer.contains("Computer Science"));
        assert!(answer.contains("Duration"));
    }

    #[test]
    fn test_skill_search_fallback() {
        let engine = AnswerEngine::new();
        // no intent pattern matches, but a skill entity is present
        let analysis = QuestionAnalysis {
            intent: crate::intent::QuestionIntent::General,
            entities: crate::intent::Entities {
                careers: vec![],
                courses: vec![],
                skills: vec!["programming".to_string()],
            },
            raw_text: "I am good at programming".to_string(),
        };
        let answer = engine.answer(&analysis);
        assert!(answer.contains("Software Developer"));
    }

    #[test]
    fn test_general_fallback_is_never_empty() {
        let engine = AnswerEngine::new();
        let answer = engine.answer(&analyze("hello there"));
        assert!(answer.contains("career questions"));
        assert!(!answer.is_empty());
    }

    struct FailingFetcher;

    impl TextFetcher for FailingFetcher {
        fn fetch_text(&self, _url: &str) -> Result<String> {
            Err(WayfinderError::enrichment("network down"))
        }
    }

    #[test]
    fn test_enrichment_failure_leaves_answer_unchanged() {
        let engine = AnswerEngine::new();
        let analysis = analyze("What's the salary for a software developer?");
        let base = engine.answer(&analysis);
        let enriched = engine.answer_enriched(&analysis, &FailingFetcher);
        assert_eq!(base, enriched);
    }
}
