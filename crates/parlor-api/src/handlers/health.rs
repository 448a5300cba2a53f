//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use parlor_service::dto::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Liveness probe
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Readiness probe: verifies the database answers
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    match parlor_db::pool::ping(state.service_context().pool()).await {
        Ok(()) => Ok(Json(ReadinessResponse {
            status: "ready",
            database: "ok",
        })),
        Err(_) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse {
                status: "not ready",
                database: "unreachable",
            }),
        )),
    }
}
