//! Wizard step routes: start, snapshot, questions, generate.

use axum::extract::{Path, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ApiError, error_response};
use crate::model::{Category, TestCase};
use crate::services::wizard::{self, GenerateMode, StartRequest};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartBody {
    pub project_description: String,
    pub requirements: Option<String>,
    #[serde(default)]
    pub manual_context: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub session_id: Uuid,
    pub category: Category,
}

/// `POST /api/wizard` — classify the description and open a session.
pub async fn start(State(state): State<AppState>, Json(body): Json<StartBody>) -> Result<Json<StartResponse>, ApiError> {
    let outcome = wizard::start(
        &state,
        StartRequest {
            project_description: body.project_description,
            requirements: body.requirements,
            manual_context: body.manual_context,
        },
    )
    .await
    .map_err(|e| error_response(&e))?;

    Ok(Json(StartResponse { session_id: outcome.session_id, category: outcome.category }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub project_description: String,
    pub requirements: Option<String>,
    pub category: Category,
    pub manual_context: bool,
    pub answers: Vec<String>,
    pub test_cases: Vec<TestCase>,
    pub testing_strategy: String,
    pub risk_areas: Vec<String>,
    pub saved_run_id: Option<String>,
}

pub(crate) fn session_response(session_id: Uuid, session: crate::state::WizardSession) -> SessionResponse {
    SessionResponse {
        session_id,
        project_description: session.project_description,
        requirements: session.requirements,
        category: session.category,
        manual_context: session.manual_context,
        answers: session.answers,
        test_cases: session.test_cases,
        testing_strategy: session.testing_strategy,
        risk_areas: session.risk_areas,
        saved_run_id: session.saved_run_id,
    }
}

/// `GET /api/wizard/:id` — current session state, for resuming navigation.
pub async fn session_snapshot(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = wizard::session_snapshot(&state, session_id)
        .await
        .map_err(|e| error_response(&e))?;
    Ok(Json(session_response(session_id, session)))
}

#[derive(Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

/// `GET /api/wizard/:id/questions` — ten clarifying questions (manual branch).
pub async fn questions(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let questions = wizard::clarifying_questions(&state, session_id)
        .await
        .map_err(|e| error_response(&e))?;
    Ok(Json(QuestionsResponse { questions }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBody {
    /// Absent for the automatic branch; present for manual answers.
    pub answers: Option<Vec<String>>,
    #[serde(default)]
    pub skip: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub category: Category,
    pub test_cases: Vec<TestCase>,
    pub testing_strategy: String,
    pub risk_areas: Vec<String>,
    pub saved_run_id: Option<String>,
}

/// `POST /api/wizard/:id/generate` — run generation, filter, auto-save.
pub async fn generate(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(body): Json<GenerateBody>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let mode = match body.answers {
        Some(answers) => GenerateMode::Manual { answers, skip: body.skip },
        None => GenerateMode::Automatic,
    };

    let outcome = wizard::generate(&state, session_id, mode)
        .await
        .map_err(|e| error_response(&e))?;

    Ok(Json(GenerateResponse {
        category: outcome.category,
        test_cases: outcome.test_cases,
        testing_strategy: outcome.testing_strategy,
        risk_areas: outcome.risk_areas,
        saved_run_id: outcome.saved_run_id,
    }))
}

#[cfg(test)]
#[path = "wizard_test.rs"]
mod tests;
