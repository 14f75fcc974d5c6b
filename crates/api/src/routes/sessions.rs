//! Session listing and detail endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::response::{ApiError, SessionEventsResponse, SessionsResponse};
use crate::routes::into_api_error;
use crate::state::AppState;

/// GET /sessions - summaries of every session, most recent first.
pub async fn list_sessions_handler(
    State(state): State<AppState>,
) -> Result<Json<SessionsResponse>, ApiError> {
    let sessions = state
        .engine
        .list_sessions()
        .await
        .map_err(into_api_error)?;

    Ok(Json(SessionsResponse {
        success: true,
        sessions,
    }))
}

/// GET /sessions/:session_id - all events for one session, timestamp
/// ascending. An unknown id answers 200 with an empty list.
pub async fn session_events_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionEventsResponse>, ApiError> {
    let events = state
        .engine
        .get_session_events(&session_id)
        .await
        .map_err(into_api_error)?;

    Ok(Json(SessionEventsResponse {
        success: true,
        events,
    }))
}
