//! Aggregation engine: session summaries and heatmap projections.
//!
//! All four operations are pure reads over the event store; each call
//! either completes with a full result or fails, never partially.

use analytics_core::{
    Error, Heatmap, HeatmapClick, Result, SessionSummary, StoredEvent,
};
use std::sync::Arc;

use crate::store::EventStore;

/// Read-side projections over an [`EventStore`].
#[derive(Clone)]
pub struct AggregationEngine {
    store: Arc<dyn EventStore>,
}

impl AggregationEngine {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Session summaries for every session in the store, most recently
    /// active first. Ties in `last_seen` keep no particular order.
    pub async fn list_sessions(&self) -> Result<Vec<SessionSummary>> {
        let mut sessions: Vec<SessionSummary> = self
            .store
            .aggregate_sessions()
            .await?
            .into_iter()
            .map(SessionSummary::from)
            .collect();
        sessions.sort_by(|a, b| b.last_seen.cmp(&a.last_seen));
        Ok(sessions)
    }

    /// All events for one session, timestamp ascending. An unknown
    /// session id yields an empty vec.
    pub async fn get_session_events(&self, session_id: &str) -> Result<Vec<StoredEvent>> {
        self.store.find_by_session(session_id).await
    }

    /// Click heatmap for a page. `pageUrl` is required; its absence is
    /// a validation error, never a store error.
    pub async fn get_heatmap(&self, page_url: Option<&str>) -> Result<Heatmap> {
        let page_url = page_url
            .filter(|p| !p.is_empty())
            .ok_or_else(|| Error::missing_field("pageUrl"))?;

        let clicks: Vec<HeatmapClick> = self
            .store
            .find_page_clicks(page_url)
            .await?
            .into_iter()
            .filter_map(|stored| match stored.event.kind {
                analytics_core::EventKind::Click { click_x, click_y } => Some(HeatmapClick {
                    session_id: stored.event.session_id,
                    click_x,
                    click_y,
                    timestamp: stored.event.timestamp,
                }),
                analytics_core::EventKind::PageView => None,
            })
            .collect();

        let total_clicks = clicks.len() as u64;
        Ok(Heatmap {
            clicks,
            total_clicks,
        })
    }

    /// Distinct page URLs across all stored events.
    pub async fn list_tracked_pages(&self) -> Result<Vec<String>> {
        self.store.distinct_page_urls().await
    }
}
