//! Provider-neutral completion types and errors.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by completion client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The completion service rejected the supplied credential.
    #[error("unauthorized: completion service rejected the API key")]
    Unauthorized,

    /// The HTTP request to the completion service failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The completion service returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The completion service response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// REQUEST
// =============================================================================

/// One completion exchange: a system instruction and a single user message.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub system: &'a str,
    pub user: &'a str,
    /// Sampling temperature; `None` uses the service default.
    pub temperature: Option<f32>,
}

// =============================================================================
// TEXT COMPLETION TRAIT
// =============================================================================

/// Provider-neutral async trait for single-shot text completion. Enables
/// scripted stubs in tests.
#[async_trait::async_trait]
pub trait TextCompletion: Send + Sync {
    /// Send one completion request using the caller-supplied credential and
    /// return the completion text.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`]; a rejected credential surfaces as
    /// [`LlmError::Unauthorized`], distinguishable from generic failures.
    async fn complete(&self, api_key: &str, request: CompletionRequest<'_>) -> Result<String, LlmError>;
}
