//! Error types for the Wayfinder library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`WayfinderError`] enum. Constructor helpers are provided for the
//! common variants.
//!
//! # Examples
//!
//! ```
//! use wayfinder::error::{Result, WayfinderError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WayfinderError::analysis("empty token stream"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Wayfinder operations.
#[derive(Error, Debug)]
pub enum WayfinderError {
    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Text analysis errors (tokenization, lemmatization, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Intent classification errors (bad patterns, etc.)
    #[error("Intent error: {0}")]
    Intent(String),

    /// Knowledge base errors (malformed entries, etc.)
    #[error("Knowledge error: {0}")]
    Knowledge(String),

    /// Statistical model collaborator failures
    #[error("Model error: {0}")]
    Model(String),

    /// Web enrichment collaborator failures
    #[error("Enrichment error: {0}")]
    Enrichment(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WayfinderError.
pub type Result<T> = std::result::Result<T, WayfinderError>;

impl WayfinderError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WayfinderError::Analysis(msg.into())
    }

    /// Create a new intent error.
    pub fn intent<S: Into<String>>(msg: S) -> Self {
        WayfinderError::Intent(msg.into())
    }

    /// Create a new knowledge error.
    pub fn knowledge<S: Into<String>>(msg: S) -> Self {
        WayfinderError::Knowledge(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        WayfinderError::Model(msg.into())
    }

    /// Create a new enrichment error.
    pub fn enrichment<S: Into<String>>(msg: S) -> Self {
        WayfinderError::Enrichment(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WayfinderError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WayfinderError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = WayfinderError::model("Test model error");
        assert_eq!(error.to_string(), "Model error: Test model error");

        let error = WayfinderError::knowledge("Test knowledge error");
        assert_eq!(error.to_string(), "Knowledge error: Test knowledge error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wayfinder_error = WayfinderError::from(io_error);

        match wayfinder_error {
            WayfinderError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
