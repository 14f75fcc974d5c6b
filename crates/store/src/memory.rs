//! In-memory event store backend.

use analytics_core::{Error, Event, Result, SessionGroup, StoredEvent};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use crate::store::EventStore;

/// Append-only in-memory event store.
///
/// Cheap to clone; clones share the same underlying log. Writes from
/// concurrent sessions are independent and order-insensitive, so a
/// single RwLock over the log is enough.
#[derive(Clone, Default)]
pub struct MemoryEventStore {
    events: Arc<RwLock<Vec<StoredEvent>>>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

/// Flattens validator output into one human-readable message.
fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let detail = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "invalid value".to_string());
            format!("{}: {}", field, detail)
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn insert(&self, event: Event) -> Result<Uuid> {
        event
            .validate()
            .map_err(|e| Error::validation(validation_message(&e)))?;

        let stored = StoredEvent::record(event, Utc::now());
        let id = stored.id;

        debug!(
            event_id = %id,
            session_id = %stored.event.session_id,
            event_type = stored.event.kind.event_type(),
            "Stored event"
        );

        self.events.write().push(stored);
        Ok(id)
    }

    async fn find_by_session(&self, session_id: &str) -> Result<Vec<StoredEvent>> {
        let mut events: Vec<StoredEvent> = self
            .events
            .read()
            .iter()
            .filter(|e| e.event.session_id == session_id)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.event.timestamp);
        Ok(events)
    }

    async fn find_page_clicks(&self, page_url: &str) -> Result<Vec<StoredEvent>> {
        Ok(self
            .events
            .read()
            .iter()
            .filter(|e| e.event.page_url == page_url && e.event.kind.is_click())
            .cloned()
            .collect())
    }

    async fn distinct_page_urls(&self) -> Result<Vec<String>> {
        let mut pages: Vec<String> = self
            .events
            .read()
            .iter()
            .map(|e| e.event.page_url.clone())
            .collect();
        pages.sort();
        pages.dedup();
        Ok(pages)
    }

    async fn aggregate_sessions(&self) -> Result<Vec<SessionGroup>> {
        let events = self.events.read();
        let mut groups: HashMap<String, SessionGroup> = HashMap::new();

        for stored in events.iter() {
            let event = &stored.event;
            groups
                .entry(event.session_id.clone())
                .and_modify(|g| {
                    g.event_count += 1;
                    g.first_seen = g.first_seen.min(event.timestamp);
                    g.last_seen = g.last_seen.max(event.timestamp);
                    g.pages.insert(event.page_url.clone());
                })
                .or_insert_with(|| SessionGroup {
                    session_id: event.session_id.clone(),
                    event_count: 1,
                    first_seen: event.timestamp,
                    last_seen: event.timestamp,
                    pages: std::iter::once(event.page_url.clone()).collect(),
                });
        }

        Ok(groups.into_values().collect())
    }
}
