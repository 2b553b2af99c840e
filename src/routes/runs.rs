//! Saved-run routes: list, fetch, delete, rehydrate.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use super::wizard::{SessionResponse, session_response};
use super::{ApiError, error_response};
use crate::model::{RunSummary, SavedRun};
use crate::services::{runs, wizard};
use crate::state::AppState;

/// `GET /api/runs` — saved-run index, newest first.
pub async fn list_runs(State(state): State<AppState>) -> Result<Json<Vec<RunSummary>>, ApiError> {
    let index = runs::list_runs(&state.storage)
        .await
        .map_err(|e| error_response(&e))?;
    Ok(Json(index))
}

/// `GET /api/runs/:id` — one full saved run.
pub async fn get_run(
    State(state): State<AppState>,
    Path(run_id): Path<String>,
) -> Result<Json<SavedRun>, ApiError> {
    let run = runs::load_run(&state.storage, &run_id)
        .await
        .map_err(|e| error_response(&e))?
        .ok_or((StatusCode::NOT_FOUND, not_found_body(&run_id)))?;
    Ok(Json(run))
}

/// `DELETE /api/runs/:id` — remove the record and its index entry.
pub async fn delete_run(
    State(state): State<AppState>,
    Path(run_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = runs::delete_run(&state.storage, &run_id)
        .await
        .map_err(|e| error_response(&e))?;
    if !deleted {
        return Err((StatusCode::NOT_FOUND, not_found_body(&run_id)));
    }
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `POST /api/runs/:id/load` — open a fresh session seeded from the run.
/// The new session keeps the saved-run guard, so viewing it again never
/// duplicates the index entry.
pub async fn load_run(
    State(state): State<AppState>,
    Path(run_id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let run = runs::load_run(&state.storage, &run_id)
        .await
        .map_err(|e| error_response(&e))?
        .ok_or((StatusCode::NOT_FOUND, not_found_body(&run_id)))?;

    let session_id = wizard::hydrate_from_run(&state, run).await;
    let session = wizard::session_snapshot(&state, session_id)
        .await
        .map_err(|e| error_response(&e))?;
    Ok(Json(session_response(session_id, session)))
}

fn not_found_body(run_id: &str) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "error": format!("saved run not found: {run_id}"), "code": "E_RUN_NOT_FOUND" }))
}
