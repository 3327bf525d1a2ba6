//! # Gemini Backend
//!
//! [`GenerativeBackend`] implementation for Google's Gemini `generateContent` REST endpoint.
//!
//! ## Environment
//!
//! [`GeminiBackend::from_config`] reads `GEMINI_API_KEY`, `GEMINI_MODEL`, `GEMINI_API_BASE` and
//! `GEMINI_TIMEOUT_SECONDS` through [`util::config`]. An empty key is accepted at construction
//! time and reported as [`ReviewError::MissingApiKey`] on every call.

use crate::error::ReviewError;
use crate::traits::backend::{GenerationSettings, GenerativeBackend};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use util::config;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Request body for the Gemini API.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    /// The content to send to the LLM.
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

/// Content wrapper for the Gemini API request.
#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

/// A single part of the content, typically a text prompt.
#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Sampling configuration, in the API's field names.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

impl From<&GenerationSettings> for GenerationConfig {
    fn from(settings: &GenerationSettings) -> Self {
        Self {
            temperature: settings.temperature,
            top_p: settings.top_p,
            top_k: settings.top_k,
            max_output_tokens: settings.max_output_tokens,
        }
    }
}

/// Response from the Gemini API.
#[derive(Deserialize)]
struct GeminiResponse {
    /// Missing entirely when the prompt itself was blocked.
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// A single candidate response from the Gemini API.
#[derive(Deserialize)]
struct Candidate {
    /// Absent when generation stopped before producing content (e.g. safety blocks).
    content: Option<ContentResponse>,
}

/// Content of a candidate response.
#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

/// A single part of the response content.
#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

/// Client for one Gemini model.
///
/// The underlying HTTP client is read-only after construction and can be shared across
/// concurrent reviews. Not `Debug`: it holds the API key.
#[derive(Clone)]
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiBackend {
    /// Creates a backend with an explicit endpoint and request timeout.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        api_base: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ReviewError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            api_base: api_base.into(),
        })
    }

    /// Creates a backend from the global application configuration.
    pub fn from_config() -> Result<Self, ReviewError> {
        Self::new(
            config::gemini_api_key(),
            config::gemini_model(),
            config::gemini_api_base(),
            Duration::from_secs(config::gemini_timeout_seconds()),
        )
    }

    /// `{base}/models/{model}:generateContent`. The key travels in the `x-goog-api-key` header,
    /// never in the URL.
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn generate(
        &self,
        prompt: &str,
        settings: &GenerationSettings,
    ) -> Result<String, ReviewError> {
        if self.api_key.trim().is_empty() {
            return Err(ReviewError::MissingApiKey);
        }

        let request_body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: settings.into(),
        };

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;
        if !status.is_success() {
            return Err(ReviewError::Api {
                status: status.as_u16(),
                body: response_text,
            });
        }

        let response = serde_json::from_str::<GeminiResponse>(&response_text).map_err(|e| {
            ReviewError::Decode(format!("{}. Full response: {}", e, response_text))
        })?;

        let parts: Vec<String> = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if parts.is_empty() {
            return Err(ReviewError::EmptyResponse);
        }
        Ok(parts.concat())
    }
}
