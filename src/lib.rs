//! # Wayfinder
//!
//! A conversational career-guidance engine for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Deterministic text analysis pipeline (tokenization, stop words, lemmatization)
//! - Keyword-driven interest extraction over a fixed vocabulary
//! - Pattern-based question intent classification with entity extraction
//! - Rule-based course and career recommendation with pluggable model collaborators
//! - Static career/course/trends knowledge base with composed answers
//! - Optional best-effort web enrichment

pub mod analysis;
pub mod answer;
pub mod chat;
pub mod enrich;
pub mod error;
pub mod extract;
pub mod features;
pub mod intent;
pub mod knowledge;
pub mod profile;
pub mod recommend;
pub mod session;
pub mod vocabulary;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
