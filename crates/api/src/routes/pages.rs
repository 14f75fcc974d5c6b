//! Tracked pages endpoint.

use axum::{extract::State, Json};

use crate::response::{ApiError, PagesResponse};
use crate::routes::into_api_error;
use crate::state::AppState;

/// GET /pages - distinct page URLs across all stored events.
pub async fn pages_handler(
    State(state): State<AppState>,
) -> Result<Json<PagesResponse>, ApiError> {
    let pages = state
        .engine
        .list_tracked_pages()
        .await
        .map_err(into_api_error)?;

    Ok(Json(PagesResponse {
        success: true,
        pages,
    }))
}
