//! Health check endpoint.

use axum::Json;
use telemetry::metrics;

use crate::response::HealthResponse;

/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        events_ingested: metrics().events_ingested.get(),
    })
}
