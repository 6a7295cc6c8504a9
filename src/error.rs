//! Custom error types for Wealth Architect
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Wealth Architect operations
#[derive(Error, Debug)]
pub enum WealthError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport-level failures talking to the generative-text service
    #[error("HTTP error: {0}")]
    Http(String),

    /// The affirmation request failed for any reason
    ///
    /// Network, authentication, malformed JSON and missing-field failures all
    /// collapse into this one variant; the message is kept for the log only.
    #[error("Affirmation generation failed: {0}")]
    AffirmationGeneration(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl WealthError {
    /// Wrap any failure on the affirmation path
    pub fn affirmation(cause: impl std::fmt::Display) -> Self {
        Self::AffirmationGeneration(cause.to_string())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an affirmation generation failure
    pub fn is_affirmation_failure(&self) -> bool {
        matches!(self, Self::AffirmationGeneration(_))
    }
}

impl From<std::io::Error> for WealthError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WealthError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for WealthError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<reqwest::Error> for WealthError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

/// Result type alias for Wealth Architect operations
pub type WealthResult<T> = Result<T, WealthError>;
