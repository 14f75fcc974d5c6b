//! Event type definitions for the analytics pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Event kind, tagged on the wire as `eventType`.
///
/// Click coordinates are part of the variant, so a click without
/// coordinates is unrepresentable. Click fields supplied alongside a
/// `page_view` are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventType", rename_all = "snake_case")]
pub enum EventKind {
    PageView,
    Click {
        /// Pointer offset relative to the full document, in pixels.
        #[serde(rename = "clickX")]
        click_x: i64,
        #[serde(rename = "clickY")]
        click_y: i64,
    },
}

impl EventKind {
    /// Returns the event type as its wire string.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PageView => "page_view",
            Self::Click { .. } => "click",
        }
    }

    pub fn is_click(&self) -> bool {
        matches!(self, Self::Click { .. })
    }
}

/// A single analytics event as reported by the collector.
///
/// Immutable once stored; lifecycle is create-once, read-many.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Opaque session identifier chosen by the client.
    #[validate(length(min = 1, max = 128))]
    pub session_id: String,
    /// Absolute URL of the page at capture time.
    #[validate(length(min = 1, max = 2048))]
    pub page_url: String,
    /// Capture instant; defaults to receive time when absent.
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: EventKind,
    /// Client user agent string.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 512))]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_height: Option<u32>,
}

impl Event {
    /// Creates an event stamped with the current instant.
    pub fn new(session_id: impl Into<String>, page_url: impl Into<String>, kind: EventKind) -> Self {
        Self {
            session_id: session_id.into(),
            page_url: page_url.into(),
            timestamp: Utc::now(),
            kind,
            user_agent: None,
            screen_width: None,
            screen_height: None,
        }
    }
}

/// An event as persisted: the reported payload plus server-assigned
/// identity and bookkeeping instants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEvent {
    /// Server-assigned event ID.
    pub id: Uuid,
    #[serde(flatten)]
    pub event: Event,
    pub created_at: DateTime<Utc>,
    /// Equal to `created_at`; events are never mutated after insert.
    pub updated_at: DateTime<Utc>,
}

impl StoredEvent {
    /// Wraps a validated event with a fresh ID and insert instants.
    pub fn record(event: Event, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            event,
            created_at: now,
            updated_at: now,
        }
    }
}
