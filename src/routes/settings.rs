//! Settings and credential routes.

use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;

use super::{ApiError, error_response};
use crate::services::credential;
use crate::services::settings::{self, PartialSettings, Settings};
use crate::state::AppState;

/// `GET /api/settings` — current sanitized settings.
pub async fn get_settings(State(state): State<AppState>) -> Result<Json<Settings>, ApiError> {
    let settings = settings::load_settings(&state.storage)
        .await
        .map_err(|e| error_response(&e))?;
    Ok(Json(settings))
}

/// `PUT /api/settings` — sanitize and persist a settings update.
pub async fn put_settings(
    State(state): State<AppState>,
    Json(body): Json<PartialSettings>,
) -> Result<Json<Settings>, ApiError> {
    let settings = settings::save_settings(&state.storage, body)
        .await
        .map_err(|e| error_response(&e))?;
    Ok(Json(settings))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialBody {
    pub api_key: String,
}

/// `PUT /api/credential` — store or replace the completion-service key.
pub async fn put_credential(
    State(state): State<AppState>,
    Json(body): Json<CredentialBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    credential::store_credential(&state.storage, &body.api_key)
        .await
        .map_err(|e| error_response(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `DELETE /api/credential` — forget the stored key.
pub async fn delete_credential(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    credential::clear_credential(&state.storage)
        .await
        .map_err(|e| error_response(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
