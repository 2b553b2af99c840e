//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the wizard pipeline and persistence concerns so route
//! handlers can stay focused on protocol translation. `wizard` sequences the
//! pipeline; the other modules are its single-purpose stages.

pub mod classify;
pub mod context;
pub mod credential;
pub mod filter;
pub mod generate;
pub mod questions;
pub mod runs;
pub mod settings;
pub mod wizard;

use uuid::Uuid;

use crate::llm::LlmError;
use crate::storage::StorageError;

/// Errors surfaced by wizard operations. All are non-fatal: the user can
/// retry from the home action, and transient session state is left as-is.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// A required field is absent — rejected before any network call.
    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    /// The completion service rejected the credential.
    #[error("unauthorized: invalid API key")]
    Unauthorized,

    /// No wizard session with the given ID.
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    /// The classification/question/generation call failed.
    #[error("completion service error: {0}")]
    Service(String),

    /// The generation response stayed malformed after JSON repair.
    #[error("test case generation returned malformed JSON")]
    Generation,

    /// Filtering removed every generated test case — surfaced distinctly so
    /// the user can revisit Settings.
    #[error("all generated test cases were filtered out by your settings")]
    EmptyResult,

    /// Durable storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl WizardError {
    /// Stable machine-readable code for logs and error bodies.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingInput(_) => "E_MISSING_INPUT",
            Self::Unauthorized => "E_UNAUTHORIZED",
            Self::SessionNotFound(_) => "E_SESSION_NOT_FOUND",
            Self::Service(_) => "E_SERVICE",
            Self::Generation => "E_GENERATION",
            Self::EmptyResult => "E_EMPTY_RESULT",
            Self::Storage(_) => "E_STORAGE",
        }
    }
}

impl From<LlmError> for WizardError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Unauthorized => Self::Unauthorized,
            other => Self::Service(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for WizardError {
    fn from(e: serde_json::Error) -> Self {
        Self::Storage(StorageError::Serialization(e))
    }
}
