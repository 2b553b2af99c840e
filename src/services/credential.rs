//! Credential management for the completion service.
//!
//! The key is stored under the durable `openai_api_key` entry and read per
//! wizard call — it is never cached in process state.

use std::sync::Arc;

use tracing::info;

use super::WizardError;
use crate::storage::Storage;

pub const CREDENTIAL_KEY: &str = "openai_api_key";

/// Load the stored credential, if any. Blank values count as absent.
///
/// # Errors
///
/// Returns [`WizardError::Storage`] when the store fails.
pub async fn load_credential(storage: &Arc<dyn Storage>) -> Result<Option<String>, WizardError> {
    let credential = storage
        .get(CREDENTIAL_KEY)
        .await?
        .and_then(|value| value.as_str().map(str::trim).map(str::to_owned))
        .filter(|key| !key.is_empty());
    Ok(credential)
}

/// Load the credential or reject the operation before any network call.
///
/// # Errors
///
/// Returns [`WizardError::MissingInput`] when no credential is stored.
pub async fn require_credential(storage: &Arc<dyn Storage>) -> Result<String, WizardError> {
    load_credential(storage)
        .await?
        .ok_or(WizardError::MissingInput("apiKey"))
}

/// Store (or replace) the credential.
///
/// # Errors
///
/// Returns [`WizardError::MissingInput`] for a blank key,
/// [`WizardError::Storage`] when the write fails.
pub async fn store_credential(storage: &Arc<dyn Storage>, api_key: &str) -> Result<(), WizardError> {
    let trimmed = api_key.trim();
    if trimmed.is_empty() {
        return Err(WizardError::MissingInput("apiKey"));
    }
    storage
        .set(CREDENTIAL_KEY, serde_json::Value::String(trimmed.to_owned()))
        .await?;
    info!("credential: API key stored");
    Ok(())
}

/// Remove the stored credential.
///
/// # Errors
///
/// Returns [`WizardError::Storage`] when the removal fails.
pub async fn clear_credential(storage: &Arc<dyn Storage>) -> Result<(), WizardError> {
    storage.remove(CREDENTIAL_KEY).await?;
    info!("credential: API key cleared");
    Ok(())
}

#[cfg(test)]
#[path = "credential_test.rs"]
mod tests;
