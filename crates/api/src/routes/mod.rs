//! API routes.

pub mod health;
pub mod heatmap;
pub mod ingest;
pub mod pages;
pub mod sessions;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::response::ApiError;
use crate::state::AppState;

/// Creates the API router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/events", post(ingest::ingest_handler))
        .route("/sessions", get(sessions::list_sessions_handler))
        .route("/sessions/:session_id", get(sessions::session_events_handler))
        .route("/heatmap", get(heatmap::heatmap_handler))
        .route("/pages", get(pages::pages_handler))
        .route("/health", get(health::health_handler))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Converts a pipeline error for the wire, counting store failures.
pub(crate) fn into_api_error(err: analytics_core::Error) -> ApiError {
    if matches!(err, analytics_core::Error::Store(_)) {
        telemetry::metrics().store_errors.inc();
    }
    ApiError::from(err)
}
