//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser wizard is a thin client over this API: it starts a run,
//! walks the question/generate steps, and pulls exports. Handlers translate
//! HTTP to service calls and map [`WizardError`] onto status codes with the
//! original `{error, code}` body shape.

pub mod export;
pub mod runs;
pub mod settings;
pub mod wizard;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::WizardError;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/wizard", post(wizard::start))
        .route("/api/wizard/{id}", get(wizard::session_snapshot))
        .route("/api/wizard/{id}/questions", get(wizard::questions))
        .route("/api/wizard/{id}/generate", post(wizard::generate))
        .route("/api/wizard/{id}/export.csv", get(export::export_csv))
        .route("/api/wizard/{id}/export.json", get(export::export_json))
        .route("/api/wizard/{id}/boilerplate", get(export::list_boilerplate))
        .route("/api/wizard/{id}/boilerplate/{framework}", get(export::render_boilerplate))
        .route("/api/settings", get(settings::get_settings).put(settings::put_settings))
        .route(
            "/api/credential",
            put(settings::put_credential).delete(settings::delete_credential),
        )
        .route("/api/runs", get(runs::list_runs))
        .route("/api/runs/{id}", get(runs::get_run).delete(runs::delete_run))
        .route("/api/runs/{id}/load", post(runs::load_run))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// HTTP rendering of a wizard error: status + `{error, code}` body.
pub(crate) type ApiError = (StatusCode, Json<serde_json::Value>);

pub(crate) fn error_response(err: &WizardError) -> ApiError {
    let status = match err {
        WizardError::MissingInput(_) => StatusCode::BAD_REQUEST,
        WizardError::Unauthorized => StatusCode::UNAUTHORIZED,
        WizardError::SessionNotFound(_) => StatusCode::NOT_FOUND,
        WizardError::EmptyResult => StatusCode::UNPROCESSABLE_ENTITY,
        WizardError::Service(_) | WizardError::Generation => StatusCode::BAD_GATEWAY,
        WizardError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(serde_json::json!({ "error": err.to_string(), "code": err.error_code() })),
    )
}
