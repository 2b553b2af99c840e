//! Test-case generation client — the heaviest of the three service calls.
//!
//! The prompt asks for 12–15 cases across the five types plus a testing
//! strategy and risk areas, as one JSON object. Responses that fail to
//! parse get one repair attempt: extract the first balanced `{...}`
//! substring and reparse. Only when that also fails does the call error.
//! The result is returned unfiltered — filtering is a separate stage.

use std::fmt::Write;
use std::sync::Arc;

use tracing::{info, warn};

use super::WizardError;
use crate::llm::{CompletionRequest, TextCompletion};
use crate::model::{Category, GeneratedRun};

const SYSTEM_PROMPT: &str = "You are a QA expert that generates test cases. Always respond with valid JSON only.";

const GENERATION_FORMAT: &str = r#"Generate test cases in JSON format with this structure:
{
  "testCases": [
    {
      "testType": "unit|integration|feature|performance|manual",
      "testName": "test name",
      "description": "what is being tested",
      "givenContext": "preconditions",
      "testSteps": ["step 1", "step 2"],
      "expectedOutcome": "what should happen",
      "priority": "high|medium|low",
      "notes": "additional notes"
    }
  ],
  "testingStrategy": "overall strategy",
  "riskAreas": ["risk 1", "risk 2"]
}

Generate 12-15 diverse test cases covering:
- Unit tests (3-4)
- Integration tests (2-3)
- Feature/acceptance tests (3-4)
- Performance tests (1-2)
- Manual tests (2-3)

Respond ONLY with valid JSON, no markdown or extra text."#;

fn generation_prompt(description: &str, category: Category, answers: &[String]) -> String {
    let mut context = String::new();
    for (i, answer) in answers.iter().enumerate() {
        let _ = writeln!(context, "{}. {answer}", i + 1);
    }

    let category = category.as_str();
    format!(
        "You are a QA expert. Generate comprehensive test cases for the following project:\n\n\
         Category: {category}\n\
         Description: {description}\n\n\
         Context from developer:\n{context}\n{GENERATION_FORMAT}"
    )
}

/// Generate test cases from the description payload, category, and ordered
/// context answers. Returns the parsed object unfiltered.
///
/// # Errors
///
/// Returns [`WizardError::Generation`] when the response stays malformed
/// after the repair attempt; [`WizardError::Unauthorized`] /
/// [`WizardError::Service`] when the call itself fails.
pub async fn generate_test_cases(
    llm: &Arc<dyn TextCompletion>,
    api_key: &str,
    description: &str,
    category: Category,
    answers: &[String],
) -> Result<GeneratedRun, WizardError> {
    let prompt = generation_prompt(description, category, answers);
    let content = llm
        .complete(api_key, CompletionRequest { system: SYSTEM_PROMPT, user: &prompt, temperature: Some(0.7) })
        .await?;

    let run = parse_generated(&content)?;
    info!(
        cases = run.test_cases.len(),
        risks = run.risk_areas.len(),
        "generate: response parsed"
    );
    Ok(run)
}

/// Parse a generation response, with one balanced-brace repair attempt.
pub(crate) fn parse_generated(content: &str) -> Result<GeneratedRun, WizardError> {
    match serde_json::from_str::<GeneratedRun>(content) {
        Ok(run) => Ok(run),
        Err(first_err) => {
            warn!(error = %first_err, "generate: direct parse failed, attempting JSON repair");
            extract_json_object(content)
                .and_then(|candidate| serde_json::from_str::<GeneratedRun>(candidate).ok())
                .ok_or(WizardError::Generation)
        }
    }
}

/// Extract the first balanced `{...}` substring, tracking string literals
/// and escapes so braces inside values do not break the depth count.
pub(crate) fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
