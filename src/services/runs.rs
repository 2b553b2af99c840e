//! Saved-run persistence — durable records plus a newest-first index.
//!
//! DESIGN
//! ======
//! A run is stored twice: the full record under its own `test_*` key, and a
//! lightweight summary prepended to the `savedTests` index so listing never
//! loads full records. Deleting removes both. The auto-save-once guard
//! lives with the wizard session, not here — this module is deliberately
//! dumb about idempotency.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use rand::distr::Alphanumeric;
use tracing::info;

use super::WizardError;
use crate::model::{RunSummary, SavedRun};
use crate::storage::Storage;

pub const RUNS_INDEX_KEY: &str = "savedTests";

const RUN_ID_PREFIX: &str = "test_";
const RUN_ID_SUFFIX_LEN: usize = 9;

// =============================================================================
// ID + TIME HELPERS
// =============================================================================

pub(crate) fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

/// Current time as an RFC 3339 string, e.g. `2025-06-01T12:00:00Z`.
#[must_use]
pub fn now_iso() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default()
}

/// Build a unique run id from the current time and a random suffix.
#[must_use]
pub fn generate_run_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(RUN_ID_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{RUN_ID_PREFIX}{}_{}", now_ms(), suffix.to_lowercase())
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Persist a run: full record under its id, summary prepended to the index.
///
/// # Errors
///
/// Returns [`WizardError::Storage`] when a write fails.
pub async fn save_run(storage: &Arc<dyn Storage>, run: &SavedRun) -> Result<(), WizardError> {
    storage.set(&run.id, serde_json::to_value(run)?).await?;

    let mut index = load_index(storage).await?;
    index.insert(
        0,
        RunSummary {
            id: run.id.clone(),
            project_description: run.project_description.clone(),
            category: run.category,
            timestamp: run.timestamp.clone(),
            test_case_count: run.test_cases.len(),
        },
    );
    storage
        .set(RUNS_INDEX_KEY, serde_json::to_value(&index)?)
        .await?;

    info!(run_id = %run.id, cases = run.test_cases.len(), "runs: saved");
    Ok(())
}

/// List saved-run summaries, newest first. A missing or corrupt index reads
/// as empty.
///
/// # Errors
///
/// Returns [`WizardError::Storage`] when the store fails.
pub async fn list_runs(storage: &Arc<dyn Storage>) -> Result<Vec<RunSummary>, WizardError> {
    load_index(storage).await
}

/// Load one full saved run. Returns `None` for unknown ids and for keys
/// whose value is not a run record.
///
/// # Errors
///
/// Returns [`WizardError::Storage`] when the store fails.
pub async fn load_run(storage: &Arc<dyn Storage>, id: &str) -> Result<Option<SavedRun>, WizardError> {
    if !id.starts_with(RUN_ID_PREFIX) {
        return Ok(None);
    }
    let run = storage
        .get(id)
        .await?
        .and_then(|value| serde_json::from_value::<SavedRun>(value).ok());
    Ok(run)
}

/// Delete a run record and its index entry. Returns `false` when neither
/// existed.
///
/// # Errors
///
/// Returns [`WizardError::Storage`] when a write fails.
pub async fn delete_run(storage: &Arc<dyn Storage>, id: &str) -> Result<bool, WizardError> {
    let existed = load_run(storage, id).await?.is_some();
    storage.remove(id).await?;

    let mut index = load_index(storage).await?;
    let before = index.len();
    index.retain(|entry| entry.id != id);
    let found_in_index = index.len() != before;
    storage
        .set(RUNS_INDEX_KEY, serde_json::to_value(&index)?)
        .await?;

    if existed || found_in_index {
        info!(run_id = %id, "runs: deleted");
    }
    Ok(existed || found_in_index)
}

async fn load_index(storage: &Arc<dyn Storage>) -> Result<Vec<RunSummary>, WizardError> {
    let index = storage
        .get(RUNS_INDEX_KEY)
        .await?
        .and_then(|value| serde_json::from_value::<Vec<RunSummary>>(value).ok())
        .unwrap_or_default();
    Ok(index)
}

#[cfg(test)]
#[path = "runs_test.rs"]
mod tests;
