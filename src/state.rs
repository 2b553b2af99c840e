//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the durable storage handle, the completion client, and a map of
//! live wizard sessions. A session is the transient scope of one run: it
//! survives navigation between wizard steps, is overwritten per new run,
//! and is left untouched when a step fails so typed input is not lost.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::llm::TextCompletion;
use crate::model::{Category, TestCase};
use crate::storage::Storage;

// =============================================================================
// WIZARD SESSION
// =============================================================================

/// Transient state of one in-flight wizard run.
#[derive(Debug, Clone)]
pub struct WizardSession {
    pub project_description: String,
    pub requirements: Option<String>,
    pub category: Category,
    /// `true` when the user chose the manual Q&A branch.
    pub manual_context: bool,
    /// Answers (manual) or derived hint strings (automatic); empty until
    /// generation has run.
    pub answers: Vec<String>,
    /// Filtered test cases; empty until generation has run.
    pub test_cases: Vec<TestCase>,
    pub testing_strategy: String,
    pub risk_areas: Vec<String>,
    /// Auto-save guard: the id of the saved run backing this session, if any.
    pub saved_run_id: Option<String>,
}

impl WizardSession {
    #[must_use]
    pub fn new(project_description: String, requirements: Option<String>, category: Category, manual_context: bool) -> Self {
        Self {
            project_description,
            requirements,
            category,
            manual_context,
            answers: Vec::new(),
            test_cases: Vec::new(),
            testing_strategy: String::new(),
            risk_areas: Vec::new(),
            saved_run_id: None,
        }
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub sessions: Arc<RwLock<HashMap<Uuid, WizardSession>>>,
    pub llm: Arc<dyn TextCompletion>,
}

impl AppState {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, llm: Arc<dyn TextCompletion>) -> Self {
        Self { storage, sessions: Arc::new(RwLock::new(HashMap::new())), llm }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn new_session_is_empty_until_generation() {
        let session = WizardSession::new("desc".into(), None, Category::Other, false);
        assert!(session.answers.is_empty());
        assert!(session.test_cases.is_empty());
        assert!(session.saved_run_id.is_none());
        assert!(!session.manual_context);
    }
}
