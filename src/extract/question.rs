//! Question-type detection.
//!
//! Classifies a chat turn as a question, an information request, or a plain
//! statement. Checks run in a fixed priority order: trailing question mark,
//! then leading wh-word, then request phrases, then statement.

use serde::{Deserialize, Serialize};

/// Leading words that mark a question.
const QUESTION_WORDS: &[&str] = &["what", "how", "why", "when", "where", "which", "who"];

/// Phrases that mark an information request.
const REQUEST_PHRASES: &[&str] = &["tell me", "can you", "do you know"];

/// The kind of chat turn, as seen by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Question,
    InformationRequest,
    Statement,
}

/// Classify the question type of a chat turn.
pub fn question_type(text: &str) -> QuestionType {
    let trimmed = text.trim_end();
    let lowered = text.to_lowercase();

    if trimmed.ends_with('?') {
        return QuestionType::Question;
    }

    if QUESTION_WORDS.iter().any(|w| lowered.starts_with(w)) {
        return QuestionType::Question;
    }

    if REQUEST_PHRASES.iter().any(|p| lowered.contains(p)) {
        return QuestionType::InformationRequest;
    }

    QuestionType::Statement
}
