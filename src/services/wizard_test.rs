use super::*;
use crate::llm::LlmError;
use crate::model::TestType;
use crate::services::settings::SETTINGS_KEY;
use crate::state::test_helpers::{seed_credential, seed_session, test_app_state};

fn generation_response() -> String {
    serde_json::json!({
        "testCases": [
            { "testType": "unit", "testName": "validates flag name", "priority": "high" },
            { "testType": "integration", "testName": "persists toggles", "priority": "medium" },
            { "testType": "feature", "testName": "end to end toggle", "priority": "high" },
            { "testType": "manual", "testName": "exploratory pass", "priority": "low" }
        ],
        "testingStrategy": "pyramid with a manual sweep",
        "riskAreas": ["stale cache", "partial rollout"]
    })
    .to_string()
}

fn seeded_session() -> WizardSession {
    WizardSession::new("A feature-flag REST service".into(), None, Category::BackendApi, false)
}

// =========================================================================
// payload assembly
// =========================================================================

#[test]
fn classification_payload_appends_requirements_block() {
    let payload = classification_payload("desc", Some("must expose REST"));
    assert_eq!(payload, "desc\n\nRequirement specification:\nmust expose REST");
    assert_eq!(classification_payload("desc", None), "desc");
}

#[test]
fn generation_payload_appends_requirements_and_global_context() {
    let payload = generation_payload("desc", Some("req"), Some("ctx"));
    assert_eq!(payload, "desc\n\nRequirement specification:\nreq\n\nGlobal considerations: ctx");
}

// =========================================================================
// prepare_manual_answers
// =========================================================================

#[test]
fn completing_with_blank_answer_is_rejected() {
    let err = prepare_manual_answers(vec!["ok".into(), "  ".into()], false, false).unwrap_err();
    assert!(matches!(err, WizardError::MissingInput("answers")));
}

#[test]
fn skip_keeps_blank_answers_by_default() {
    let answers = prepare_manual_answers(vec!["ok".into(), String::new()], true, false).unwrap();
    assert_eq!(answers.len(), 2);
}

#[test]
fn strict_skip_drops_blank_answers() {
    let answers = prepare_manual_answers(vec!["ok".into(), "  ".into(), "also ok".into()], true, true).unwrap();
    assert_eq!(answers, vec!["ok", "also ok"]);
}

// =========================================================================
// start
// =========================================================================

#[tokio::test]
async fn start_classifies_and_creates_session() {
    let state = test_app_state(vec![Ok("backend-api".into())]);
    seed_credential(&state).await;

    let outcome = start(
        &state,
        StartRequest {
            project_description: "  A feature-flag REST service  ".into(),
            requirements: Some("  audit log required  ".into()),
            manual_context: true,
        },
    )
    .await
    .unwrap();

    assert_eq!(outcome.category, Category::BackendApi);
    let session = session_snapshot(&state, outcome.session_id).await.unwrap();
    assert_eq!(session.project_description, "A feature-flag REST service");
    assert_eq!(session.requirements.as_deref(), Some("audit log required"));
    assert!(session.manual_context);
    assert!(session.saved_run_id.is_none());
}

#[tokio::test]
async fn start_rejects_blank_description_before_any_call() {
    let state = test_app_state(vec![]);
    seed_credential(&state).await;
    let err = start(
        &state,
        StartRequest { project_description: "   ".into(), requirements: None, manual_context: false },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, WizardError::MissingInput("projectDescription")));
}

#[tokio::test]
async fn start_without_credential_is_missing_input() {
    let state = test_app_state(vec![]);
    let err = start(
        &state,
        StartRequest { project_description: "desc".into(), requirements: None, manual_context: false },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, WizardError::MissingInput("apiKey")));
}

#[tokio::test]
async fn start_surfaces_unauthorized_distinctly() {
    let state = test_app_state(vec![Err(LlmError::Unauthorized)]);
    seed_credential(&state).await;
    let err = start(
        &state,
        StartRequest { project_description: "desc".into(), requirements: None, manual_context: false },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, WizardError::Unauthorized));
}

// =========================================================================
// clarifying questions
// =========================================================================

#[tokio::test]
async fn questions_fall_back_on_malformed_output() {
    let state = test_app_state(vec![Ok("Here are my thoughts...".into())]);
    seed_credential(&state).await;
    let session_id = seed_session(&state, seeded_session()).await;

    let qs = clarifying_questions(&state, session_id).await.unwrap();
    assert_eq!(qs, crate::services::questions::fallback_questions());
}

#[tokio::test]
async fn questions_for_unknown_session_error() {
    let state = test_app_state(vec![]);
    let err = clarifying_questions(&state, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, WizardError::SessionNotFound(_)));
}

// =========================================================================
// generate — automatic branch
// =========================================================================

#[tokio::test]
async fn automatic_generate_commits_and_auto_saves() {
    let state = test_app_state(vec![Ok(generation_response())]);
    seed_credential(&state).await;
    let session_id = seed_session(&state, seeded_session()).await;

    let outcome = generate(&state, session_id, GenerateMode::Automatic)
        .await
        .unwrap();
    assert_eq!(outcome.test_cases.len(), 4);
    assert_eq!(outcome.testing_strategy, "pyramid with a manual sweep");
    let saved_id = outcome.saved_run_id.expect("auto-save should run");

    let session = session_snapshot(&state, session_id).await.unwrap();
    assert_eq!(session.test_cases.len(), 4);
    assert_eq!(session.saved_run_id.as_deref(), Some(saved_id.as_str()));
    // Automatic answers end with the backend-api hints.
    let hints = crate::services::context::category_hints(Category::BackendApi);
    assert!(session.answers.ends_with(&hints.map(str::to_owned)));

    let index = runs::list_runs(&state.storage).await.unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index[0].test_case_count, 4);
}

#[tokio::test]
async fn generating_twice_saves_only_once() {
    let state = test_app_state(vec![Ok(generation_response()), Ok(generation_response())]);
    seed_credential(&state).await;
    let session_id = seed_session(&state, seeded_session()).await;

    let first = generate(&state, session_id, GenerateMode::Automatic)
        .await
        .unwrap();
    let second = generate(&state, session_id, GenerateMode::Automatic)
        .await
        .unwrap();
    assert_eq!(first.saved_run_id, second.saved_run_id);

    let index = runs::list_runs(&state.storage).await.unwrap();
    assert_eq!(index.len(), 1);
}

#[tokio::test]
async fn fully_filtered_result_is_empty_result_and_leaves_session_untouched() {
    let state = test_app_state(vec![Ok(serde_json::json!({
        "testCases": [
            { "testType": "manual", "testName": "only manual", "priority": "low" }
        ],
        "testingStrategy": "manual only",
        "riskAreas": []
    })
    .to_string())]);
    seed_credential(&state).await;
    state
        .storage
        .set(SETTINGS_KEY, serde_json::json!({ "disabledTestTypes": { "manual": true } }))
        .await
        .unwrap();
    let session_id = seed_session(&state, seeded_session()).await;

    let err = generate(&state, session_id, GenerateMode::Automatic)
        .await
        .unwrap_err();
    assert!(matches!(err, WizardError::EmptyResult));

    let session = session_snapshot(&state, session_id).await.unwrap();
    assert!(session.test_cases.is_empty());
    assert!(session.saved_run_id.is_none());
    assert!(runs::list_runs(&state.storage).await.unwrap().is_empty());
}

#[tokio::test]
async fn disabled_types_are_filtered_from_the_outcome() {
    let state = test_app_state(vec![Ok(generation_response())]);
    seed_credential(&state).await;
    state
        .storage
        .set(SETTINGS_KEY, serde_json::json!({ "disabledTestTypes": { "manual": true } }))
        .await
        .unwrap();
    let session_id = seed_session(&state, seeded_session()).await;

    let outcome = generate(&state, session_id, GenerateMode::Automatic)
        .await
        .unwrap();
    assert_eq!(outcome.test_cases.len(), 3);
    assert!(outcome.test_cases.iter().all(|tc| tc.test_type != TestType::Manual));
}

// =========================================================================
// generate — manual branch
// =========================================================================

#[tokio::test]
async fn manual_generate_appends_supplemental_context() {
    let state = test_app_state(vec![Ok(generation_response())]);
    seed_credential(&state).await;
    state
        .storage
        .set(SETTINGS_KEY, serde_json::json!({ "defaultContext": "watch the p99" }))
        .await
        .unwrap();
    let mut session = seeded_session();
    session.requirements = Some("audit log required".into());
    session.manual_context = true;
    let session_id = seed_session(&state, session).await;

    let answers: Vec<String> = (1..=10).map(|i| format!("answer {i}")).collect();
    generate(&state, session_id, GenerateMode::Manual { answers, skip: false })
        .await
        .unwrap();

    let session = session_snapshot(&state, session_id).await.unwrap();
    assert_eq!(session.answers.len(), 12);
    assert_eq!(session.answers[10], "Requirement specification: audit log required");
    assert_eq!(session.answers[11], "watch the p99");
}

#[tokio::test]
async fn manual_generate_rejects_incomplete_answers_without_skip() {
    let state = test_app_state(vec![]);
    seed_credential(&state).await;
    let session_id = seed_session(&state, seeded_session()).await;

    let err = generate(
        &state,
        session_id,
        GenerateMode::Manual { answers: vec!["one".into(), String::new()], skip: false },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, WizardError::MissingInput("answers")));
}

// =========================================================================
// hydration
// =========================================================================

#[tokio::test]
async fn hydrated_session_keeps_the_save_guard() {
    let state = test_app_state(vec![Ok(generation_response())]);
    seed_credential(&state).await;

    let run = SavedRun {
        id: "test_1_abcdefghi".into(),
        project_description: "old project".into(),
        category: Category::Database,
        test_cases: vec![crate::state::test_helpers::dummy_case(TestType::Unit, "legacy")],
        testing_strategy: "old strategy".into(),
        risk_areas: vec![],
        timestamp: "2025-01-01T00:00:00Z".into(),
    };
    let session_id = hydrate_from_run(&state, run).await;

    let session = session_snapshot(&state, session_id).await.unwrap();
    assert_eq!(session.saved_run_id.as_deref(), Some("test_1_abcdefghi"));
    assert_eq!(session.test_cases.len(), 1);

    // Regenerating from a hydrated session must not create a second record.
    generate(&state, session_id, GenerateMode::Automatic)
        .await
        .unwrap();
    assert!(runs::list_runs(&state.storage).await.unwrap().is_empty());
}
