//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::logic::pipeline::EngineStatus;
use crate::models::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    models: EngineStatus,
}

/// Reports per-model load status so a half-loaded process is visible to
/// monitoring even though it still answers requests for the healthy path.
pub async fn check(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let models = state.engine.status();
    let status = if models.binary_model_loaded
        && models.failure_type_model_loaded
        && models.scaler_loaded
    {
        "healthy"
    } else {
        "degraded"
    };

    Json(ApiResponse::ok(
        "Service is healthy",
        HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            timestamp: chrono::Utc::now().timestamp(),
            models,
        },
    ))
}
