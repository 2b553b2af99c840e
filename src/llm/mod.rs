//! LLM — text-completion client for the wizard's generation calls.
//!
//! DESIGN
//! ======
//! The wizard consumes exactly one capability from the outside world: send a
//! system instruction plus one user message, get a single text completion
//! back. The [`TextCompletion`] trait captures that contract so services can
//! be tested against a scripted stub; [`openai::OpenAiClient`] is the real
//! implementation. The credential travels with each request — the client
//! never holds one.

pub mod config;
pub mod openai;
pub mod types;

pub use types::{CompletionRequest, LlmError, TextCompletion};
