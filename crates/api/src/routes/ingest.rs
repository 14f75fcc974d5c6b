//! Ingestion endpoint handler.

use analytics_core::Event;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use telemetry::metrics;
use tracing::{debug, warn};

use crate::response::{ApiError, IngestResponse};
use crate::routes::into_api_error;
use crate::state::AppState;

/// POST /events - persists one collector event.
///
/// The body is parsed by hand rather than through the `Json` extractor
/// so malformed payloads answer with the standard error envelope and a
/// message naming what was wrong.
pub async fn ingest_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<IngestResponse>), ApiError> {
    let event: Event = serde_json::from_slice(&body).map_err(|e| {
        metrics().events_rejected.inc();
        warn!(error = %e, "Rejected unparsable event payload");
        ApiError::bad_request(format!("invalid event payload: {}", e))
    })?;

    let session_id = event.session_id.clone();
    let event_type = event.kind.event_type();

    let event_id = state.store.insert(event).await.map_err(|e| {
        metrics().events_rejected.inc();
        warn!(error = %e, session_id = %session_id, "Rejected event");
        into_api_error(e)
    })?;

    metrics().events_ingested.inc();
    debug!(
        event_id = %event_id,
        session_id = %session_id,
        event_type = event_type,
        "Event ingested"
    );

    Ok((StatusCode::CREATED, Json(IngestResponse::created(event_id))))
}
