//! Custom error types for daystep
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for daystep operations
#[derive(Error, Debug)]
pub enum DaystepError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors (bad input, disallowed transitions)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Token collaborator errors
    #[error("Token error: {0}")]
    Token(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl DaystepError {
    /// Create a "not found" error for wizard steps
    pub fn step_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Step",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for tokens
    pub fn token_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Token",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for DaystepError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DaystepError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for daystep operations
pub type DaystepResult<T> = Result<T, DaystepError>;
