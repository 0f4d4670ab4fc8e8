//! Conversational front door over the extraction and answering pipeline.
//!
//! [`ChatEngine::process`] takes one raw user turn, runs the extraction
//! passes, folds the results into the session's profile, then routes the
//! turn: questions and information requests go through intent
//! classification and the answer engine, statements get a contextual
//! acknowledgement with suggestions. Both the user turn and the assistant
//! reply are appended to the session.
//!
//! # Examples
//!
//! ```
//! use wayfinder::chat::ChatEngine;
//! use wayfinder::session::Session;
//!
//! let engine = ChatEngine::new().unwrap();
//! let mut session = Session::new();
//! let reply = engine.process(&mut session, "I love coding and mathematics");
//! assert!(!reply.is_empty());
//! assert!(session.profile.chat_keywords.iter().any(|k| k == "Coding"));
//! ```

use tracing::debug;

use crate::answer::AnswerEngine;
use crate::error::Result;
use crate::extract::keywords::KeywordExtractor;
use crate::extract::question::{QuestionType, question_type};
use crate::extract::sentiment::{Sentiment, SentimentAnalyzer};
use crate::extract::terms::{TermCategory, TermExtractor};
use crate::intent::IntentClassifier;
use crate::session::Session;

/// Keywords that route a statement toward technology suggestions.
const TECH_KEYWORDS: &[&str] = &[
    "coding",
    "programming",
    "computer",
    "software",
    "technology",
    "data",
];

/// Keywords that route a statement toward creative suggestions.
const CREATIVE_KEYWORDS: &[&str] = &["art", "design", "creative", "drawing", "music", "writing"];

/// Keywords that route a statement toward business suggestions.
const BUSINESS_KEYWORDS: &[&str] = &[
    "business",
    "management",
    "marketing",
    "finance",
    "entrepreneurship",
];

/// Keywords that route a statement toward people-focused suggestions.
const PEOPLE_KEYWORDS: &[&str] = &[
    "teaching",
    "helping",
    "communication",
    "social",
    "psychology",
];

/// Processes chat turns against a session.
pub struct ChatEngine {
    extractor: KeywordExtractor,
    sentiments: SentimentAnalyzer,
    terms: TermExtractor,
    classifier: IntentClassifier,
    answers: AnswerEngine,
}

impl ChatEngine {
    /// Create a chat engine with the default pipeline.
    ///
    /// Fails only if the intent patterns do not compile.
    pub fn new() -> Result<Self> {
        Ok(ChatEngine {
            extractor: KeywordExtractor::new(),
            sentiments: SentimentAnalyzer::new(),
            terms: TermExtractor::new(),
            classifier: IntentClassifier::new()?,
            answers: AnswerEngine::new(),
        })
    }

    /// Process one user turn: update the session profile and return the
    /// assistant's reply.
    pub fn process(&self, session: &mut Session, text: &str) -> String {
        let keywords = self.extractor.extract(text);
        let kind = question_type(text);
        let sentiment = self.sentiments.sentiment(text);
        let career_terms = self.terms.career_terms(text);

        debug!(?kind, ?sentiment, keyword_count = keywords.len(), "processing chat turn");

        session.profile.add_chat_keywords(keywords.iter().cloned());
        session.profile.sentiment = sentiment;
        session.profile.career_terms = career_terms.clone();
        session.push_user_turn(text);

        let reply = match kind {
            QuestionType::Question | QuestionType::InformationRequest => {
                let analysis = self.classifier.analyze(text);
                self.answers.answer(&analysis)
            }
            QuestionType::Statement => {
                self.statement_response(&keywords, sentiment, &career_terms)
            }
        };

        session.push_assistant_turn(reply.clone());
        reply
    }

    /// Build the contextual reply to a statement turn.
    fn statement_response(
        &self,
        keywords: &[String],
        sentiment: Sentiment,
        career_terms: &crate::extract::terms::CareerTerms,
    ) -> String {
        if keywords.is_empty() && career_terms.is_empty() {
            return empty_input_guidance().to_string();
        }

        let mut parts: Vec<String> = Vec::new();

        match sentiment {
            Sentiment::Positive => {
                parts.push("I can sense your enthusiasm! That's wonderful.".to_string());
            }
            Sentiment::Negative => {
                parts.push(
                    "I understand you might have some concerns. Let me help address them."
                        .to_string(),
                );
            }
            Sentiment::Neutral => {}
        }

        if !keywords.is_empty() {
            let shown: Vec<&str> = keywords.iter().take(5).map(|k| k.as_str()).collect();
            parts.push(format!(
                "I can see you're interested in: **{}**",
                shown.join(", ")
            ));
        }

        let skills = career_terms.bucket(TermCategory::Skills);
        if !skills.is_empty() {
            let shown: Vec<&str> = skills.iter().take(3).map(|s| s.as_str()).collect();
            parts.push(format!("You mentioned skills like: {}", shown.join(", ")));
        }

        let interests = career_terms.bucket(TermCategory::Interests);
        if !interests.is_empty() {
            let shown: Vec<&str> = interests.iter().take(3).map(|s| s.as_str()).collect();
            parts.push(format!("Your interests include: {}", shown.join(", ")));
        }

        let goals = career_terms.bucket(TermCategory::Goals);
        if !goals.is_empty() {
            let shown: Vec<&str> = goals.iter().take(3).map(|s| s.as_str()).collect();
            parts.push(format!(
                "I notice you have goals related to: {}",
                shown.join(", ")
            ));
        }

        parts.push(String::new());
        parts.push("Based on what you've shared, here are some ways I can help:".to_string());
        parts.push(String::new());

        // keyword comparison is case-insensitive so vocabulary tags like
        // "Coding" hit the lowercase bucket words
        let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        let hits = |bucket: &[&str]| lowered.iter().any(|k| bucket.contains(&k.as_str()));

        if hits(TECH_KEYWORDS) {
            parts.push(
                "• Ask me about technology careers, required skills, or salary ranges".to_string(),
            );
        }
        if hits(CREATIVE_KEYWORDS) {
            parts.push("• Explore creative career paths and portfolio requirements".to_string());
        }
        if hits(BUSINESS_KEYWORDS) {
            parts.push(
                "• Learn about business careers and entrepreneurship opportunities".to_string(),
            );
        }
        if hits(PEOPLE_KEYWORDS) {
            parts.push(
                "• Discover people-focused careers in education, healthcare, or counseling"
                    .to_string(),
            );
        }

        parts.push(String::new());
        parts.push(
            "You can ask specific questions or request recommendations for personalized \
             suggestions!"
                .to_string(),
        );

        parts.join("\n")
    }
}

impl std::fmt::Debug for ChatEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatEngine").finish_non_exhaustive()
    }
}

/// Guidance shown when a statement carries no usable signal.
fn empty_input_guidance() -> &'static str {
    "I understand you're looking for career guidance! Could you tell me more specifically \
     about:\n\n\
     • What subjects or activities do you enjoy?\n\
     • What are your strongest skills?\n\
     • What type of work environment appeals to you?\n\
     • Any particular industries that interest you?\n\n\
     You can also ask me specific questions like:\n\
     • \"What's the salary for a software developer?\"\n\
     • \"What education do I need to become a nurse?\"\n\
     • \"What are the trends in the technology industry?\"\n\n\
     The more details you share, the better I can help you find the perfect career path!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_routes_to_answer_engine() {
        let engine = ChatEngine::new().unwrap();
        let mut session = Session::new();
        let reply = engine.process(&mut session, "What's the salary for a software developer?");
        assert!(reply.contains("Software Developer"));
        assert!(reply.contains("$65,000"));
        assert_eq!(session.turns.len(), 2);
    }

    #[test]
    fn test_statement_gets_contextual_response() {
        let engine = ChatEngine::new().unwrap();
        let mut session = Session::new();
        let reply = engine.process(&mut session, "I love coding and solving problems");
        assert!(reply.contains("enthusiasm"));
        assert!(reply.contains("Coding"));
        assert!(reply.contains("technology careers"));
    }

    #[test]
    fn test_negative_statement_acknowledged() {
        let engine = ChatEngine::new().unwrap();
        let mut session = Session::new();
        let reply = engine.process(&mut session, "I hate my boring spreadsheets");
        assert!(reply.contains("concerns"));
    }

    #[test]
    fn test_empty_signal_statement_gets_guidance() {
        let engine = ChatEngine::new().unwrap();
        let mut session = Session::new();
        // every word is either a stop word or too short to survive analysis
        let reply = engine.process(&mut session, "it is so so");
        assert!(reply.contains("Could you tell me more"));
    }

    #[test]
    fn test_profile_accumulates_across_turns() {
        let engine = ChatEngine::new().unwrap();
        let mut session = Session::new();
        engine.process(&mut session, "I enjoy coding");
        engine.process(&mut session, "I also like drawing and painting");
        assert!(session.profile.chat_keywords.iter().any(|k| k == "Coding"));
        assert!(session.profile.chat_keywords.iter().any(|k| k == "Drawing"));
        assert_eq!(session.turns.len(), 4);
    }

    #[test]
    fn test_information_request_routes_to_answers() {
        let engine = ChatEngine::new().unwrap();
        let mut session = Session::new();
        let reply = engine.process(&mut session, "tell me about trends in the technology industry");
        assert!(reply.contains("Technology Industry"));
    }
}
