//! Text analysis module for Wayfinder.
//!
//! This module provides the normalization pipeline that every extraction pass
//! runs on: lowercasing, tokenization, stop-word removal, short-token removal,
//! and reduction to dictionary base forms.

pub mod analyzer;
pub mod lemmatizer;
pub mod stop;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use lemmatizer::*;
pub use stop::*;
pub use tokenizer::*;
