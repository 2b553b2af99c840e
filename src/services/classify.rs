//! Classification client — project description → closed category set.

use std::sync::Arc;

use tracing::info;

use super::WizardError;
use crate::llm::{CompletionRequest, TextCompletion};
use crate::model::Category;

fn classification_system_prompt() -> String {
    let labels: Vec<&str> = Category::CLASSIFIABLE
        .iter()
        .map(|c| c.as_str())
        .collect();
    format!(
        "You are a project classifier. Classify the given project description into one of these \
         categories: {}. Respond with ONLY the category name, nothing else.",
        labels.join(", ")
    )
}

/// Classify a description. Output is trimmed and lower-cased; anything
/// outside the closed set falls back to [`Category::Other`].
///
/// # Errors
///
/// Returns [`WizardError::Unauthorized`] when the service rejects the
/// credential, [`WizardError::Service`] for other call failures.
pub async fn classify(
    llm: &Arc<dyn TextCompletion>,
    api_key: &str,
    description: &str,
) -> Result<Category, WizardError> {
    let system = classification_system_prompt();
    let raw = llm
        .complete(api_key, CompletionRequest { system: &system, user: description, temperature: None })
        .await?;

    let category = normalize_category(&raw);
    info!(raw = %raw.trim(), category = category.as_str(), "classify: category assigned");
    Ok(category)
}

/// Normalize raw classifier output to a member of the closed set.
pub(crate) fn normalize_category(raw: &str) -> Category {
    let normalized = raw.trim().to_lowercase();
    Category::parse(&normalized).unwrap_or(Category::Other)
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
