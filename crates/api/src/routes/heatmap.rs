//! Click heatmap endpoint.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::response::{ApiError, HeatmapResponse};
use crate::routes::into_api_error;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HeatmapParams {
    #[serde(rename = "pageUrl")]
    page_url: Option<String>,
}

/// GET /heatmap?pageUrl= - click coordinates for one page.
///
/// A missing `pageUrl` is a 400, never a store error.
pub async fn heatmap_handler(
    State(state): State<AppState>,
    Query(params): Query<HeatmapParams>,
) -> Result<Json<HeatmapResponse>, ApiError> {
    let heatmap = state
        .engine
        .get_heatmap(params.page_url.as_deref())
        .await
        .map_err(into_api_error)?;

    Ok(Json(HeatmapResponse::new(heatmap)))
}
