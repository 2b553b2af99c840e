use std::sync::Arc;

use super::*;
use crate::storage::memory::MemoryStorage;

fn memory() -> Arc<dyn Storage> {
    Arc::new(MemoryStorage::new())
}

#[tokio::test]
async fn store_trims_and_round_trips() {
    let storage = memory();
    store_credential(&storage, "  sk-test-123  ").await.unwrap();
    assert_eq!(load_credential(&storage).await.unwrap().as_deref(), Some("sk-test-123"));
}

#[tokio::test]
async fn store_blank_key_is_missing_input() {
    let storage = memory();
    let err = store_credential(&storage, "   ").await.unwrap_err();
    assert!(matches!(err, WizardError::MissingInput("apiKey")));
}

#[tokio::test]
async fn require_without_stored_key_is_missing_input() {
    let storage = memory();
    let err = require_credential(&storage).await.unwrap_err();
    assert!(matches!(err, WizardError::MissingInput("apiKey")));
}

#[tokio::test]
async fn clear_removes_the_key() {
    let storage = memory();
    store_credential(&storage, "sk-test").await.unwrap();
    clear_credential(&storage).await.unwrap();
    assert_eq!(load_credential(&storage).await.unwrap(), None);
}

#[tokio::test]
async fn non_string_stored_value_counts_as_absent() {
    let storage = memory();
    storage
        .set(CREDENTIAL_KEY, serde_json::json!({ "oops": true }))
        .await
        .unwrap();
    assert_eq!(load_credential(&storage).await.unwrap(), None);
}
