//! Standardized API responses.
//!
//! Every endpoint answers with a `success` flag: `{"success": true,
//! ...payload}` on the happy path, `{"success": false, "error": msg}`
//! otherwise.

use analytics_core::{Heatmap, SessionSummary, StoredEvent};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Success response for `POST /events`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestResponse {
    pub success: bool,
    pub event_id: Uuid,
}

impl IngestResponse {
    pub fn created(event_id: Uuid) -> Self {
        Self {
            success: true,
            event_id,
        }
    }
}

/// Success response for `GET /sessions`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionsResponse {
    pub success: bool,
    pub sessions: Vec<SessionSummary>,
}

/// Success response for `GET /sessions/:id`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionEventsResponse {
    pub success: bool,
    pub events: Vec<StoredEvent>,
}

/// Success response for `GET /heatmap`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapResponse {
    pub success: bool,
    #[serde(flatten)]
    pub heatmap: Heatmap,
}

impl HeatmapResponse {
    pub fn new(heatmap: Heatmap) -> Self {
        Self {
            success: true,
            heatmap,
        }
    }
}

/// Success response for `GET /pages`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PagesResponse {
    pub success: bool,
    pub pages: Vec<String>,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub events_ingested: u64,
}

/// Error envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

/// API error type carrying the HTTP status to answer with.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: msg.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.error,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<analytics_core::Error> for ApiError {
    fn from(err: analytics_core::Error) -> Self {
        let status = StatusCode::from_u16(err.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self {
            status,
            error: err.to_string(),
        }
    }
}
