//! Gemini `generateContent` client
//!
//! Speaks the public REST API directly with reqwest:
//! `POST {base}/models/{model}:generateContent`, key in `x-goog-api-key`.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use zeroize::Zeroizing;

use super::generator::{GenerationRequest, TextGenerator};
use crate::config::settings::Settings;
use crate::error::{WealthError, WealthResult};

const API_KEY_HEADER: &str = "x-goog-api-key";
const MAX_ERROR_BODY_CHARS: usize = 300;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
    temperature: f32,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Build the JSON request body for a generation call
pub fn request_body(request: &GenerationRequest) -> WealthResult<Value> {
    let body = GenerateContentBody {
        contents: vec![Content {
            role: "user",
            parts: vec![Part {
                text: &request.prompt,
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: &request.response_mime_type,
            response_schema: &request.response_schema,
            temperature: request.temperature,
        },
    };
    Ok(serde_json::to_value(body)?)
}

/// Pull the reply text out of a `generateContent` response
///
/// Concatenates the text parts of the first candidate. Returns `None` when
/// there is no candidate or no text at all.
pub fn response_text(response: &Value) -> Option<String> {
    let parsed: GenerateContentResponse = serde_json::from_value(response.clone()).ok()?;
    let content = parsed.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// HTTP client for the Gemini API
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Zeroizing<String>,
}

impl GeminiClient {
    /// Create a client against `base_url` with a whole-request timeout
    pub fn new(
        base_url: impl Into<String>,
        api_key: Zeroizing<String>,
        timeout: Duration,
    ) -> WealthResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WealthError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Create a client from user settings and the API key environment variable
    pub fn from_settings(settings: &Settings) -> WealthResult<Self> {
        Self::new(
            settings.api_base_url.clone(),
            settings.api_key()?,
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    /// Endpoint URL for a model
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    fn headers(&self) -> WealthResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(self.api_key.as_str())
            .map_err(|e| WealthError::Config(format!("invalid API key: {e}")))?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn backend_tag(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, request: &GenerationRequest) -> WealthResult<String> {
        let url = self.endpoint(&request.model);
        let body = request_body(request)?;
        debug!("event=gemini_request model={} url={}", request.model, url);

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(MAX_ERROR_BODY_CHARS)
                .collect();
            warn!("event=gemini_request status={} detail={}", status, detail);
            return Err(WealthError::Http(format!(
                "service returned {}: {}",
                status, detail
            )));
        }

        let payload: Value = response.json().await?;
        response_text(&payload)
            .ok_or_else(|| WealthError::Http("no response text from Gemini".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_request() -> GenerationRequest {
        GenerationRequest {
            model: "gemini-2.5-flash".into(),
            prompt: "hello".into(),
            response_schema: json!({"type": "OBJECT"}),
            response_mime_type: "application/json".into(),
            temperature: 0.7,
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body = request_body(&sample_request()).unwrap();
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let payload = json!({
            "candidates": [{
                "content": {"parts": [{"text": "{\"affirm"}, {"text": "ations\":[]}"}]}
            }]
        });
        assert_eq!(
            response_text(&payload).as_deref(),
            Some("{\"affirmations\":[]}")
        );
    }

    #[test]
    fn test_response_text_missing() {
        assert_eq!(response_text(&json!({})), None);
        assert_eq!(response_text(&json!({"candidates": []})), None);
        assert_eq!(
            response_text(&json!({"candidates": [{"finishReason": "SAFETY"}]})),
            None
        );
        assert_eq!(
            response_text(&json!({"candidates": [{"content": {"parts": [{}]}}]})),
            None
        );
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new(
            "https://example.test/v1beta/",
            Zeroizing::new("key".to_string()),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
