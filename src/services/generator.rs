//! Generative-text collaborator seam
//!
//! The affirmation requester talks to the outside world only through
//! [`TextGenerator`], so the production HTTP client and test doubles are
//! interchangeable.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::WealthResult;

/// Creativity setting used for every affirmation request
pub const AFFIRMATION_TEMPERATURE: f32 = 0.7;

/// MIME type the service is told to answer with
pub const JSON_MIME_TYPE: &str = "application/json";

/// One structured-output generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Model identifier, e.g. `gemini-2.5-flash`
    pub model: String,
    /// Natural-language instruction
    pub prompt: String,
    /// Schema the reply must conform to
    pub response_schema: Value,
    pub response_mime_type: String,
    pub temperature: f32,
}

/// A service that turns a prompt into (structured) text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short name for logs
    fn backend_tag(&self) -> &'static str;

    /// Perform exactly one generation call and return the raw reply text
    ///
    /// A reply without any text is an error, not an empty string.
    async fn generate(&self, request: &GenerationRequest) -> WealthResult<String>;
}
