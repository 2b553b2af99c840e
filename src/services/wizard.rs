//! Wizard orchestration — classify → context → generate → filter → save.
//!
//! DESIGN
//! ======
//! The three service calls are strictly sequential: classification assigns
//! the category the question/generation prompts need, and generation needs
//! the context block (manual answers or the automatic builder's output).
//! Each step snapshots the session, does its slow work without holding the
//! lock, and only commits results on success — a failed step leaves the
//! transient state exactly as it was.

use std::sync::OnceLock;

use tracing::{info, warn};
use uuid::Uuid;

use super::{WizardError, classify, context, credential, filter, generate, questions, runs, settings};
use crate::model::{Category, SavedRun, TestCase};
use crate::state::{AppState, WizardSession};

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

/// When set, the manual "skip" path drops blank answers before generation
/// instead of sending them through verbatim.
fn strict_skip_validation() -> bool {
    static VALUE: OnceLock<bool> = OnceLock::new();
    *VALUE.get_or_init(|| env_parse("WIZARD_STRICT_SKIP", false))
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug)]
pub struct StartRequest {
    pub project_description: String,
    pub requirements: Option<String>,
    /// `true` selects the manual Q&A branch instead of the automatic one.
    pub manual_context: bool,
}

#[derive(Debug)]
pub struct StartOutcome {
    pub session_id: Uuid,
    pub category: Category,
}

#[derive(Debug)]
pub enum GenerateMode {
    /// Derive the context block with the automatic builder.
    Automatic,
    /// Use user-typed answers from the question step.
    Manual { answers: Vec<String>, skip: bool },
}

#[derive(Debug)]
pub struct GenerateOutcome {
    pub category: Category,
    pub test_cases: Vec<TestCase>,
    pub testing_strategy: String,
    pub risk_areas: Vec<String>,
    pub saved_run_id: Option<String>,
}

// =============================================================================
// PAYLOAD ASSEMBLY
// =============================================================================

pub(crate) fn classification_payload(description: &str, requirements: Option<&str>) -> String {
    let mut parts = vec![description.to_owned()];
    if let Some(req) = requirements {
        parts.push(format!("Requirement specification:\n{req}"));
    }
    parts.join("\n\n")
}

pub(crate) fn generation_payload(
    description: &str,
    requirements: Option<&str>,
    default_context: Option<&str>,
) -> String {
    let mut parts = vec![description.to_owned()];
    if let Some(req) = requirements {
        parts.push(format!("Requirement specification:\n{req}"));
    }
    if let Some(ctx) = default_context {
        parts.push(format!("Global considerations: {ctx}"));
    }
    parts.join("\n\n")
}

/// Validate and normalize manual answers. Completing requires every answer
/// non-blank; skipping sends answers through as typed, unless strict skip
/// validation drops the blank ones.
pub(crate) fn prepare_manual_answers(
    mut answers: Vec<String>,
    skip: bool,
    strict_skip: bool,
) -> Result<Vec<String>, WizardError> {
    if !skip && answers.iter().any(|a| a.trim().is_empty()) {
        return Err(WizardError::MissingInput("answers"));
    }
    if skip && strict_skip {
        answers.retain(|a| !a.trim().is_empty());
    }
    Ok(answers)
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Start a wizard run: classify the description and create the session.
///
/// # Errors
///
/// `MissingInput` for a blank description or absent credential (rejected
/// before the network call); `Unauthorized`/`Service` from classification.
pub async fn start(state: &AppState, request: StartRequest) -> Result<StartOutcome, WizardError> {
    let description = request.project_description.trim().to_owned();
    if description.is_empty() {
        return Err(WizardError::MissingInput("projectDescription"));
    }
    let requirements = request
        .requirements
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_owned);

    let api_key = credential::require_credential(&state.storage).await?;
    let payload = classification_payload(&description, requirements.as_deref());
    let category = classify::classify(&state.llm, &api_key, &payload).await?;

    let session_id = Uuid::new_v4();
    let session = WizardSession::new(description, requirements, category, request.manual_context);
    {
        let mut sessions = state.sessions.write().await;
        sessions.insert(session_id, session);
    }

    info!(
        %session_id,
        category = category.as_str(),
        manual = request.manual_context,
        "wizard: run started"
    );
    Ok(StartOutcome { session_id, category })
}

/// Clone the current session state, for resuming navigation.
///
/// # Errors
///
/// `SessionNotFound` for unknown ids.
pub async fn session_snapshot(state: &AppState, session_id: Uuid) -> Result<WizardSession, WizardError> {
    let sessions = state.sessions.read().await;
    sessions
        .get(&session_id)
        .cloned()
        .ok_or(WizardError::SessionNotFound(session_id))
}

/// Manual branch: fetch ten clarifying questions for the session.
///
/// # Errors
///
/// `SessionNotFound`, `MissingInput` (credential), `Unauthorized`, `Service`.
pub async fn clarifying_questions(state: &AppState, session_id: Uuid) -> Result<Vec<String>, WizardError> {
    let session = session_snapshot(state, session_id).await?;
    let api_key = credential::require_credential(&state.storage).await?;
    questions::generate_questions(&state.llm, &api_key, &session.project_description, session.category).await
}

/// Run generation for the session, filter the result, commit it to the
/// session, and auto-save at most once.
///
/// # Errors
///
/// `EmptyResult` when filtering removes every case (session untouched);
/// otherwise the usual pipeline errors.
pub async fn generate(state: &AppState, session_id: Uuid, mode: GenerateMode) -> Result<GenerateOutcome, WizardError> {
    let session = session_snapshot(state, session_id).await?;
    let api_key = credential::require_credential(&state.storage).await?;
    let prefs = settings::load_settings(&state.storage).await?;

    let default_context = Some(prefs.default_context.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_owned);

    let (payload, answers) = match mode {
        GenerateMode::Automatic => {
            let answers = context::build_auto_context(
                &session.project_description,
                session.category,
                session.requirements.as_deref(),
                default_context.as_deref(),
            );
            let payload = generation_payload(
                &session.project_description,
                session.requirements.as_deref(),
                default_context.as_deref(),
            );
            (payload, answers)
        }
        GenerateMode::Manual { answers, skip } => {
            let mut answers = prepare_manual_answers(answers, skip, strict_skip_validation())?;
            if let Some(req) = session.requirements.as_deref() {
                answers.push(format!("Requirement specification: {req}"));
            }
            if let Some(ctx) = default_context {
                answers.push(ctx);
            }
            (session.project_description.clone(), answers)
        }
    };

    let run = generate::generate_test_cases(&state.llm, &api_key, &payload, session.category, &answers).await?;
    let filtered = filter::filter_by_settings(&run.test_cases, &prefs);
    if filtered.is_empty() {
        info!(%session_id, generated = run.test_cases.len(), "wizard: every case filtered out");
        return Err(WizardError::EmptyResult);
    }

    // Commit results to the session before saving.
    let already_saved = {
        let mut sessions = state.sessions.write().await;
        let live = sessions
            .get_mut(&session_id)
            .ok_or(WizardError::SessionNotFound(session_id))?;
        live.answers = answers;
        live.test_cases = filtered.clone();
        live.testing_strategy = run.testing_strategy.clone();
        live.risk_areas = run.risk_areas.clone();
        live.saved_run_id.clone()
    };

    let saved_run_id = match already_saved {
        Some(id) => Some(id),
        None => auto_save(state, session_id, &session, &filtered, &run.testing_strategy, &run.risk_areas).await,
    };

    info!(
        %session_id,
        cases = filtered.len(),
        saved = saved_run_id.is_some(),
        "wizard: generation complete"
    );
    Ok(GenerateOutcome {
        category: session.category,
        test_cases: filtered,
        testing_strategy: run.testing_strategy,
        risk_areas: run.risk_areas,
        saved_run_id,
    })
}

/// Auto-save the run. Save failures are logged, not surfaced — the guard
/// stays unset so a later attempt can retry.
async fn auto_save(
    state: &AppState,
    session_id: Uuid,
    session: &WizardSession,
    test_cases: &[TestCase],
    testing_strategy: &str,
    risk_areas: &[String],
) -> Option<String> {
    let record = SavedRun {
        id: runs::generate_run_id(),
        project_description: session.project_description.clone(),
        category: session.category,
        test_cases: test_cases.to_vec(),
        testing_strategy: testing_strategy.to_owned(),
        risk_areas: risk_areas.to_vec(),
        timestamp: runs::now_iso(),
    };

    match runs::save_run(&state.storage, &record).await {
        Ok(()) => {
            let mut sessions = state.sessions.write().await;
            if let Some(live) = sessions.get_mut(&session_id) {
                live.saved_run_id = Some(record.id.clone());
            }
            Some(record.id)
        }
        Err(e) => {
            warn!(%session_id, error = %e, "wizard: auto-save failed");
            None
        }
    }
}

/// Create a fresh session from a saved run. The saved-run guard is set to
/// the loaded id so re-viewing never duplicates the index entry.
pub async fn hydrate_from_run(state: &AppState, run: SavedRun) -> Uuid {
    let session_id = Uuid::new_v4();
    let mut session = WizardSession::new(run.project_description, None, run.category, false);
    session.test_cases = run.test_cases;
    session.testing_strategy = run.testing_strategy;
    session.risk_areas = run.risk_areas;
    session.saved_run_id = Some(run.id);

    let mut sessions = state.sessions.write().await;
    sessions.insert(session_id, session);
    info!(%session_id, "wizard: session hydrated from saved run");
    session_id
}

#[cfg(test)]
#[path = "wizard_test.rs"]
mod tests;
