//! Extraction passes over user text.
//!
//! Every pass here is a deterministic, pure function of its input text:
//! vocabulary keyword extraction, sentiment, career-related term buckets,
//! and question-type detection. They share the [`crate::analysis`]
//! normalization pipeline.

pub mod keywords;
pub mod question;
pub mod sentiment;
pub mod terms;

// Re-export commonly used types
pub use keywords::*;
pub use question::*;
pub use sentiment::*;
pub use terms::*;
