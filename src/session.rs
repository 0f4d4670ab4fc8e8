//! Session state: one user profile plus the chat transcript.
//!
//! A [`Session`] is owned by exactly one logical thread of control; every
//! operation on it is synchronous and completes before the next turn is
//! processed, so no locking is involved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;
use crate::recommend::Recommendation;

/// Who produced a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Who spoke.
    pub role: ChatRole,
    /// What was said.
    pub content: String,
    /// When the turn was recorded.
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    /// Create a turn stamped with the current time.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        ChatTurn {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// One counselling session: profile, transcript, and last recommendation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// The user's accumulated profile.
    pub profile: UserProfile,
    /// Append-only chat transcript.
    pub turns: Vec<ChatTurn>,
    /// The most recent recommendation, if any.
    pub recommendation: Option<Recommendation>,
}

impl Session {
    /// Create a fresh session.
    pub fn new() -> Self {
        Session::default()
    }

    /// Append a user turn to the transcript.
    pub fn push_user_turn(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn::new(ChatRole::User, content));
    }

    /// Append an assistant turn to the transcript.
    pub fn push_assistant_turn(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn::new(ChatRole::Assistant, content));
    }

    /// The most recent user turn, if any.
    pub fn last_user_turn(&self) -> Option<&ChatTurn> {
        self.turns.iter().rev().find(|t| t.role == ChatRole::User)
    }

    /// Discard the profile, transcript, and recommendation.
    pub fn reset(&mut self) {
        self.profile.clear();
        self.turns.clear();
        self.recommendation = None;
    }
}
