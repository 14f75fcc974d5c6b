//! Derived session and heatmap projections.
//!
//! A session is not stored anywhere: it is a maximal run of events
//! sharing a `sessionId`, bounded client-side by an inactivity timeout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Session inactivity timeout (minutes). A client reuses a session id
/// only while the gap since its last activity stays under this.
pub const SESSION_TIMEOUT_MINUTES: i64 = 30;

/// Per-session aggregate produced by the store's grouping primitive.
#[derive(Debug, Clone)]
pub struct SessionGroup {
    pub session_id: String,
    pub event_count: u64,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    /// Distinct page URLs visited in this session.
    pub pages: BTreeSet<String>,
}

/// Summary of one session, as returned by `GET /sessions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: String,
    pub event_count: u64,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub page_count: u64,
}

impl From<SessionGroup> for SessionSummary {
    fn from(group: SessionGroup) -> Self {
        Self {
            session_id: group.session_id,
            event_count: group.event_count,
            first_seen: group.first_seen,
            last_seen: group.last_seen,
            page_count: group.pages.len() as u64,
        }
    }
}

/// One click in a heatmap projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapClick {
    pub session_id: String,
    pub click_x: i64,
    pub click_y: i64,
    pub timestamp: DateTime<Utc>,
}

/// Click heatmap for a single page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heatmap {
    pub clicks: Vec<HeatmapClick>,
    pub total_clicks: u64,
}
