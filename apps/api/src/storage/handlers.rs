//! Axum route handlers for the CV slot and the settings panel.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::cv::Cv;
use crate::state::AppState;
use crate::storage;

#[derive(Debug, Deserialize)]
pub struct PutApiKeyRequest {
    pub api_key: String,
}

#[derive(Debug, Serialize)]
pub struct ApiKeyStatusResponse {
    /// True when a key is available from either the store or the
    /// environment fallback.
    pub configured: bool,
}

/// GET /api/v1/cv
///
/// Returns the stored CV. An empty slot is 404, normal absent state the
/// client renders as "upload your CV first".
pub async fn handle_get_cv(State(state): State<AppState>) -> Result<Json<Cv>, AppError> {
    let cv = storage::load_cv(state.store.as_ref())
        .await?
        .ok_or_else(|| AppError::NotFound("No CV is stored".to_string()))?;
    Ok(Json(cv))
}

/// PUT /api/v1/cv
///
/// Overwrites the single CV slot wholesale.
pub async fn handle_put_cv(
    State(state): State<AppState>,
    Json(cv): Json<Cv>,
) -> Result<StatusCode, AppError> {
    if cv.name.trim().is_empty() {
        return Err(AppError::Validation("CV name cannot be empty".to_string()));
    }

    storage::save_cv(state.store.as_ref(), &cv).await?;
    info!("Stored CV for {}", cv.name);
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/cv
///
/// Removes the CV key only; the API key slot is untouched.
pub async fn handle_delete_cv(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    storage::delete_cv(state.store.as_ref()).await?;
    info!("Deleted stored CV");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/settings/api-key
///
/// Reports whether an API key is available, without echoing it back.
pub async fn handle_get_api_key(
    State(state): State<AppState>,
) -> Result<Json<ApiKeyStatusResponse>, AppError> {
    let stored = storage::load_api_key(state.store.as_ref()).await?;
    let configured = stored.map(|k| !k.trim().is_empty()).unwrap_or(false)
        || state.config.openai_api_key.is_some();
    Ok(Json(ApiKeyStatusResponse { configured }))
}

/// PUT /api/v1/settings/api-key
pub async fn handle_put_api_key(
    State(state): State<AppState>,
    Json(request): Json<PutApiKeyRequest>,
) -> Result<StatusCode, AppError> {
    if request.api_key.trim().is_empty() {
        return Err(AppError::Validation(
            "api_key cannot be empty".to_string(),
        ));
    }

    storage::save_api_key(state.store.as_ref(), request.api_key.trim()).await?;
    info!("Stored API key from settings");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/settings/api-key
pub async fn handle_delete_api_key(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    storage::delete_api_key(state.store.as_ref()).await?;
    info!("Deleted stored API key");
    Ok(StatusCode::NO_CONTENT)
}
