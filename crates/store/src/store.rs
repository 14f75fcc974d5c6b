//! The event store interface consumed by the aggregation engine.

use analytics_core::{Event, Result, SessionGroup, StoredEvent};
use async_trait::async_trait;
use uuid::Uuid;

/// Append-only event collection, queryable by session, page, and type.
///
/// Events are immutable once inserted; no operation mutates or deletes
/// them. Ordering guarantees are per method.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Validates and persists one event, returning its assigned ID.
    ///
    /// Fails with `Error::Validation` on a malformed payload; no
    /// partial write is possible.
    async fn insert(&self, event: Event) -> Result<Uuid>;

    /// All events for a session, ordered by timestamp ascending.
    /// An unknown session id yields an empty vec, not an error.
    async fn find_by_session(&self, session_id: &str) -> Result<Vec<StoredEvent>>;

    /// Click events for a page. Coordinates are guaranteed present by
    /// the event type. Ordering is stable per call.
    async fn find_page_clicks(&self, page_url: &str) -> Result<Vec<StoredEvent>>;

    /// Distinct page URLs across all stored events.
    async fn distinct_page_urls(&self) -> Result<Vec<String>>;

    /// Groups all events by session id, computing count, min/max
    /// timestamp, and the distinct page set per group.
    async fn aggregate_sessions(&self) -> Result<Vec<SessionGroup>>;
}
