use axum::Json;
use cheese_api::HealthResponse;

/// GET /health — server liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
