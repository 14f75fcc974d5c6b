//! Event capture.
//!
//! The host browsing context binds its own listeners (document load,
//! capture-phase click, DOM mutation batches) and forwards them here.
//! Capture is synchronous and never blocks: transmission happens on a
//! spawned task the capturing path does not await.

use analytics_core::{Event, EventKind, Result};
use parking_lot::Mutex;
use std::sync::Arc;
use telemetry::metrics;

use crate::config::TrackerConfig;
use crate::delivery::{Delivery, HttpTransport, Transport};
use crate::identity::{Clock, IdentityStorage, MemoryStorage, SessionIdentity, SystemClock};

/// Descriptive client metadata attached to every event.
#[derive(Debug, Clone, Default)]
pub struct ClientEnv {
    pub user_agent: Option<String>,
    pub screen_width: Option<u32>,
    pub screen_height: Option<u32>,
}

/// The collector's public surface: `track_event`, `track_page_view`,
/// `track_click`, and `get_session_id`, plus the two capture probes
/// the host wires to its load and mutation observers.
pub struct Tracker {
    identity: SessionIdentity,
    delivery: Delivery,
    env: ClientEnv,
    clock: Arc<dyn Clock>,
    current_url: Mutex<String>,
}

impl Tracker {
    /// Tracker with HTTP delivery, wall-clock time, and in-memory
    /// session storage (a host with persistent storage should use
    /// [`Tracker::with_parts`]).
    pub fn new(config: TrackerConfig, env: ClientEnv) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config.endpoint)?);
        Ok(Self::with_parts(
            config,
            env,
            Arc::new(MemoryStorage::new()),
            Arc::new(SystemClock),
            transport,
        ))
    }

    /// Fully injectable constructor: storage, clock, and transport are
    /// all seams for the host (and for tests).
    pub fn with_parts(
        config: TrackerConfig,
        env: ClientEnv,
        storage: Arc<dyn IdentityStorage>,
        clock: Arc<dyn Clock>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            identity: SessionIdentity::new(storage, clock.clone(), config.session_timeout),
            delivery: Delivery::new(transport),
            env,
            clock,
            current_url: Mutex::new(config.initial_url),
        }
    }

    /// Current session id. Renews the session's last-activity instant,
    /// like every capture does.
    pub fn get_session_id(&self) -> String {
        self.identity.get_or_create()
    }

    /// Initial-document-load trigger: fires one page view for the
    /// current URL.
    pub fn page_loaded(&self) {
        self.track_page_view();
    }

    /// SPA navigation probe, called after each DOM mutation batch.
    /// Fires a page view only when the URL differs from the last one
    /// observed; revisiting the same URL without an intervening change
    /// fires nothing.
    pub fn observe_url(&self, url: &str) {
        {
            let mut current = self.current_url.lock();
            if *current == url {
                return;
            }
            *current = url.to_string();
        }
        self.track_page_view();
    }

    pub fn track_page_view(&self) {
        metrics().page_views_captured.inc();
        self.track_event(EventKind::PageView);
    }

    /// Click trigger; coordinates are relative to the full document.
    pub fn track_click(&self, page_x: i64, page_y: i64) {
        metrics().clicks_captured.inc();
        self.track_event(EventKind::Click {
            click_x: page_x,
            click_y: page_y,
        });
    }

    /// Host-page opt-in custom capture.
    pub fn track_event(&self, kind: EventKind) {
        self.delivery.dispatch(self.assemble(kind));
    }

    fn assemble(&self, kind: EventKind) -> Event {
        Event {
            session_id: self.identity.get_or_create(),
            page_url: self.current_url.lock().clone(),
            timestamp: self.clock.now(),
            kind,
            user_agent: self.env.user_agent.clone(),
            screen_width: self.env.screen_width,
            screen_height: self.env.screen_height,
        }
    }
}
