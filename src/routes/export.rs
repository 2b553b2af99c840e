//! Export routes: CSV/JSON downloads and boilerplate rendering.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use uuid::Uuid;

use super::{ApiError, error_response};
use crate::export::{self, boilerplate};
use crate::model::{Analysis, FrameworkKey};
use crate::services::{WizardError, runs, settings, wizard};
use crate::state::AppState;

async fn session_with_cases(
    state: &AppState,
    session_id: Uuid,
) -> Result<crate::state::WizardSession, ApiError> {
    let session = wizard::session_snapshot(state, session_id)
        .await
        .map_err(|e| error_response(&e))?;
    if session.test_cases.is_empty() {
        return Err(error_response(&WizardError::MissingInput("testCases")));
    }
    Ok(session)
}

fn attachment(content_type: &'static str, filename: &str, body: String) -> Response {
    (
        [
            (CONTENT_TYPE, content_type),
            (CONTENT_DISPOSITION, &format!("attachment; filename=\"{filename}\"")),
        ],
        body,
    )
        .into_response()
}

/// `GET /api/wizard/:id/export.csv` — download the filtered cases as CSV.
pub async fn export_csv(State(state): State<AppState>, Path(session_id): Path<Uuid>) -> Result<Response, ApiError> {
    let session = session_with_cases(&state, session_id).await?;
    let csv = export::to_csv(&session.test_cases);
    Ok(attachment("text/csv; charset=utf-8", export::CSV_FILENAME, csv))
}

/// `GET /api/wizard/:id/export.json` — analysis + cases + timestamp.
pub async fn export_json(State(state): State<AppState>, Path(session_id): Path<Uuid>) -> Result<Response, ApiError> {
    let session = session_with_cases(&state, session_id).await?;
    let analysis = Analysis {
        testing_strategy: session.testing_strategy.clone(),
        risk_areas: session.risk_areas.clone(),
    };
    let doc = export::to_json(&analysis, &session.test_cases, &runs::now_iso());
    let body = serde_json::to_string_pretty(&doc).unwrap_or_else(|_| doc.to_string());
    Ok(attachment("application/json; charset=utf-8", export::JSON_FILENAME, body))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkInfo {
    pub key: FrameworkKey,
    pub title: &'static str,
    pub description: &'static str,
    pub filename: &'static str,
    pub language: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoilerplateListResponse {
    pub frameworks: Vec<FrameworkInfo>,
    pub sample_size: u32,
    pub note: &'static str,
}

/// `GET /api/wizard/:id/boilerplate` — selectable frameworks. All disabled
/// yields an empty list, not an error.
pub async fn list_boilerplate(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<BoilerplateListResponse>, ApiError> {
    wizard::session_snapshot(&state, session_id)
        .await
        .map_err(|e| error_response(&e))?;
    let prefs = settings::load_settings(&state.storage)
        .await
        .map_err(|e| error_response(&e))?;

    let frameworks = boilerplate::enabled_frameworks(&prefs)
        .into_iter()
        .map(|fw| FrameworkInfo {
            key: fw.key,
            title: fw.title,
            description: fw.description,
            filename: fw.filename,
            language: fw.language,
        })
        .collect();

    Ok(Json(BoilerplateListResponse {
        frameworks,
        sample_size: prefs.boilerplate_sample_size,
        note: boilerplate::SCAFFOLDING_NOTE,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoilerplateResponse {
    pub framework: FrameworkKey,
    pub filename: &'static str,
    pub language: &'static str,
    pub code: String,
    pub stub_count: usize,
    pub note: &'static str,
}

/// `GET /api/wizard/:id/boilerplate/:framework` — rendered skeleton file.
/// Unknown and disabled frameworks are both unselectable: 404.
pub async fn render_boilerplate(
    State(state): State<AppState>,
    Path((session_id, framework)): Path<(Uuid, String)>,
) -> Result<Json<BoilerplateResponse>, ApiError> {
    let session = session_with_cases(&state, session_id).await?;
    let prefs = settings::load_settings(&state.storage)
        .await
        .map_err(|e| error_response(&e))?;

    let Some(key) = FrameworkKey::parse(&framework) else {
        return Err(unselectable(&framework));
    };
    if prefs.is_boilerplate_disabled(key) {
        return Err(unselectable(key.as_str()));
    }

    let fw = boilerplate::framework(key);
    let code = fw.render(&session.test_cases, prefs.boilerplate_sample_size);
    let stub_count =
        boilerplate::clamp_sample_size(prefs.boilerplate_sample_size, session.test_cases.len());

    Ok(Json(BoilerplateResponse {
        framework: key,
        filename: fw.filename,
        language: fw.language,
        code,
        stub_count,
        note: boilerplate::SCAFFOLDING_NOTE,
    }))
}

fn unselectable(framework: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": format!("framework not selectable: {framework}"),
            "code": "E_FRAMEWORK_NOT_SELECTABLE",
        })),
    )
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
