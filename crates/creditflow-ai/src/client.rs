//! HTTP client for the Gemini `generateContent` REST API.
//!
//! Wraps `reqwest` with Gemini-specific error handling and typed response
//! deserialization. The request is a single attempt with a client-level
//! timeout — no retry, no cancellation — because the only consumer treats
//! any failure as a degraded answer, not a fault to recover from.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::AiError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for the Gemini REST API.
///
/// Use [`GeminiClient::new`] for production or
/// [`GeminiClient::with_base_url`] to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: Url,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiClient {
    /// Creates a new client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, AiError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`AiError::Api`] if `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, AiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("creditflow/0.1 (credit-pipeline-analytics)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| AiError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url,
        })
    }

    /// Sends `prompt` to the model and returns the first candidate's text.
    ///
    /// # Errors
    ///
    /// - [`AiError::Api`] if the API returns an error envelope.
    /// - [`AiError::Http`] on network failure or non-2xx HTTP status.
    /// - [`AiError::Deserialize`] if the response does not match the
    ///   expected shape.
    /// - [`AiError::EmptyResponse`] if no candidate text is present.
    pub async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let url = self.build_url()?;
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_owned(),
                }],
            }],
        };

        let response = self.client.post(url.clone()).json(&request).send().await?;
        let body = response.error_for_status()?.text().await?;
        let body: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| AiError::Deserialize {
                context: url.path().to_string(),
                source: e,
            })?;
        Self::check_api_error(&body)?;

        let envelope: GenerateResponse =
            serde_json::from_value(body).map_err(|e| AiError::Deserialize {
                context: format!("generateContent({})", self.model),
                source: e,
            })?;

        envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(AiError::EmptyResponse)
    }

    /// Builds `<base>/v1beta/models/<model>:generateContent?key=<api_key>`.
    fn build_url(&self) -> Result<Url, AiError> {
        let path = format!("v1beta/models/{}:generateContent", self.model);
        let mut url = self
            .base_url
            .join(&path)
            .map_err(|e| AiError::Api(format!("invalid model path '{path}': {e}")))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    /// Surfaces the Gemini error envelope (`{"error": {"message": ..}}`)
    /// as [`AiError::Api`].
    fn check_api_error(body: &serde_json::Value) -> Result<(), AiError> {
        if let Some(error) = body.get("error") {
            let msg = error
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(AiError::Api(msg));
        }
        Ok(())
    }
}
