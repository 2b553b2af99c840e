//! OpenAI-compatible chat-completions client.
//!
//! Each wizard call sends one system message and one user message to
//! `/chat/completions` and reads back the first choice's message content.
//! A 401 status maps to [`LlmError::Unauthorized`] so callers can prompt for
//! a new credential instead of showing a generic failure.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use super::config::LlmConfig;
use super::types::{CompletionRequest, LlmError, TextCompletion};

pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    /// Build the client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url, model: config.model })
    }

    /// Return the configured model name (e.g. `"gpt-4"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl TextCompletion for OpenAiClient {
    async fn complete(&self, api_key: &str, request: CompletionRequest<'_>) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: request.system },
                ChatMessage { role: "user", content: request.user },
            ],
            temperature: request.temperature,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if status == 401 {
            return Err(LlmError::Unauthorized);
        }
        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_completion_text(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

pub(crate) fn parse_completion_text(json_text: &str) -> Result<String, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let content = root
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str);

    match content {
        Some(text) => Ok(text.to_owned()),
        None => Err(LlmError::ApiParse(
            "chat completion missing choices[0].message.content".to_string(),
        )),
    }
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
