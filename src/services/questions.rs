//! Question generation client — exactly ten clarifying questions.
//!
//! The service is asked for a JSON array of ten strings. Malformed output
//! is recovered locally: parse failures and non-array results substitute
//! the fixed generic list, and a short array is topped up from it, so the
//! caller always receives exactly [`QUESTION_COUNT`] entries.

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use super::WizardError;
use crate::llm::{CompletionRequest, TextCompletion};
use crate::model::Category;

pub const QUESTION_COUNT: usize = 10;

const GENERIC_QUESTIONS: [&str; QUESTION_COUNT] = [
    "What is the main purpose of this code?",
    "What are the primary inputs?",
    "What are the expected outputs?",
    "What error cases should be tested?",
    "What are the edge cases?",
    "What performance requirements exist?",
    "What security considerations matter?",
    "What dependencies are involved?",
    "What validation rules apply?",
    "What should not be tested?",
];

const SYSTEM_PROMPT: &str =
    "You are a QA expert. Generate exactly 10 testing-focused questions. Respond ONLY with a JSON array of strings.";

fn question_prompt(description: &str, category: Category) -> String {
    format!(
        "You are a QA expert. Based on the following project description and category, generate \
         exactly 10 specific, actionable questions that a developer should answer to help write \
         comprehensive tests for this project.\n\n\
         Project Category: {}\n\
         Project Description: {}\n\n\
         Generate 10 questions that are:\n\
         - Specific to this project type\n\
         - Actionable and clear\n\
         - Focused on testing requirements\n\
         - Cover different aspects (inputs, outputs, errors, edge cases, performance, security, etc.)\n\n\
         Format your response as a JSON array of strings, like this:\n\
         [\"Question 1?\", \"Question 2?\", \"Question 3?\", ...]\n\n\
         Respond ONLY with the JSON array, no additional text or markdown.",
        category.as_str(),
        description
    )
}

/// The fixed generic question list used when the service output is unusable.
#[must_use]
pub fn fallback_questions() -> Vec<String> {
    GENERIC_QUESTIONS.iter().map(|&q| q.to_owned()).collect()
}

/// Request ten clarifying questions for the manual context branch.
///
/// # Errors
///
/// Returns [`WizardError::Unauthorized`] or [`WizardError::Service`] when
/// the call itself fails. Malformed response bodies are not errors — they
/// recover to the generic list.
pub async fn generate_questions(
    llm: &Arc<dyn TextCompletion>,
    api_key: &str,
    description: &str,
    category: Category,
) -> Result<Vec<String>, WizardError> {
    let prompt = question_prompt(description, category);
    let content = llm
        .complete(api_key, CompletionRequest { system: SYSTEM_PROMPT, user: &prompt, temperature: Some(0.7) })
        .await?;

    Ok(parse_questions(&content))
}

/// Parse service output into exactly [`QUESTION_COUNT`] questions, visibly
/// branching to the generic list when the payload is not a string array.
pub(crate) fn parse_questions(content: &str) -> Vec<String> {
    let parsed: Option<Vec<String>> = serde_json::from_str::<Value>(content)
        .ok()
        .and_then(|value| match value {
            Value::Array(items) => Some(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(question) => Some(question),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        });

    let mut questions = match parsed {
        Some(questions) => questions,
        None => {
            warn!("questions: unparsable service output, using generic fallback");
            return fallback_questions();
        }
    };

    questions.truncate(QUESTION_COUNT);
    if questions.len() < QUESTION_COUNT {
        questions.extend(
            GENERIC_QUESTIONS[questions.len()..]
                .iter()
                .map(|&q| q.to_owned()),
        );
    }
    questions
}

#[cfg(test)]
#[path = "questions_test.rs"]
mod tests;
