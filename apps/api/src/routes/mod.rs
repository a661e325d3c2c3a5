pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pipeline::handlers as pipeline_handlers;
use crate::state::AppState;
use crate::storage::handlers as storage_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job ingestion and session cache
        .route(
            "/api/v1/jobs/extracted",
            post(pipeline_handlers::handle_jobs_extracted),
        )
        .route(
            "/api/v1/jobs/viewed",
            get(pipeline_handlers::handle_jobs_viewed),
        )
        .route(
            "/api/v1/jobs/score",
            post(pipeline_handlers::handle_job_score),
        )
        // CV slot
        .route(
            "/api/v1/cv",
            get(storage_handlers::handle_get_cv)
                .put(storage_handlers::handle_put_cv)
                .delete(storage_handlers::handle_delete_cv),
        )
        .route(
            "/api/v1/cv/upload",
            post(pipeline_handlers::handle_cv_upload),
        )
        .route(
            "/api/v1/cv/tailor",
            post(pipeline_handlers::handle_cv_tailor),
        )
        // Cover letters
        .route(
            "/api/v1/cover-letter",
            post(pipeline_handlers::handle_cover_letter),
        )
        // Settings panel
        .route(
            "/api/v1/settings/api-key",
            get(storage_handlers::handle_get_api_key)
                .put(storage_handlers::handle_put_api_key)
                .delete(storage_handlers::handle_delete_api_key),
        )
        .with_state(state)
}
