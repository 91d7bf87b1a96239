//! Gemini API client module
//!
//! Encapsulates the single `generateContent` call used to produce a summary.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

use crate::core::config::AppConfig;
use crate::errors::SummaryError;

/// Low temperature keeps summaries close to the source text.
pub const GENERATION_TEMPERATURE: f64 = 0.2;

/// Returned instead of an error when a successful response carries no text.
pub const NO_SUMMARY_FALLBACK: &str = "No summary available.";

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: GENERATION_TEMPERATURE,
            },
        }
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a response, falling
/// back to [`NO_SUMMARY_FALLBACK`] when the path is missing or empty.
#[must_use]
pub fn extract_summary_text(response: &Value) -> String {
    response
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
        .and_then(|parts| parts.first())
        .and_then(|part| part.get("text"))
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(NO_SUMMARY_FALLBACK)
        .to_string()
}

/// The `error.message` field of an error body, if the body is JSON and has one.
#[must_use]
pub fn remote_error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    json.get("error")
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
}

/// Anything that can turn a prompt into summary text.
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    /// # Errors
    ///
    /// Returns [`SummaryError::RemoteRequest`] for a non-success status and
    /// [`SummaryError::Transport`] when no usable response arrived.
    async fn request_summary(&self, prompt: &str, api_key: &str) -> Result<String, SummaryError>;
}

/// Gemini API client for generating summaries
pub struct GeminiClient {
    http: Client,
    api_base: Url,
    model: String,
}

impl GeminiClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    #[must_use]
    pub fn with_http_client(http: Client, config: &AppConfig) -> Self {
        Self {
            http,
            api_base: config.api_base.clone(),
            model: config.model.clone(),
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// `{api_base}/v1beta/models/{model}:generateContent?key=<api_key>`
    ///
    /// # Errors
    ///
    /// Fails if the configured base URL cannot carry a path.
    pub fn endpoint_url(&self, api_key: &str) -> Result<Url, SummaryError> {
        let method = format!("{}:generateContent", self.model);
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| SummaryError::transport(format!("invalid API base URL: {}", self.api_base)))?
            .pop_if_empty()
            .extend(["v1beta", "models", method.as_str()]);
        url.query_pairs_mut().append_pair("key", api_key);
        Ok(url)
    }
}

#[async_trait]
impl SummaryGenerator for GeminiClient {
    async fn request_summary(&self, prompt: &str, api_key: &str) -> Result<String, SummaryError> {
        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting summary from {} with a {} character prompt",
            self.model,
            prompt.chars().count()
        );

        let url = self.endpoint_url(api_key)?;
        let response = self
            .http
            .post(url)
            .json(&GenerateContentRequest::new(prompt))
            .send()
            .await
            .map_err(|e| {
                // The URL carries the key; never log it.
                let e = e.without_url();
                warn!("Gemini API request failed: {}", e);
                SummaryError::transport(format!("Gemini API request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = remote_error_message(&error_text);
            warn!(
                status = status.as_u16(),
                "Gemini API error: {}",
                message.as_deref().unwrap_or("no message in response body")
            );
            return Err(SummaryError::RemoteRequest {
                status: status.as_u16(),
                message,
            });
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummaryError::transport(format!(
                "Failed to parse Gemini response: {}",
                e.without_url()
            ))
        })?;

        let text = extract_summary_text(&response_json);
        if text == NO_SUMMARY_FALLBACK {
            warn!("Gemini response had no candidate text");
        }
        Ok(text)
    }
}
