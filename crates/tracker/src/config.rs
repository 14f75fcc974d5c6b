//! Tracker configuration.

use analytics_core::SESSION_TIMEOUT_MINUTES;
use chrono::Duration;

/// Configuration for a [`Tracker`](crate::Tracker) instance.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Ingest endpoint, e.g. `http://localhost:5000/events`.
    pub endpoint: String,
    /// URL of the page at tracker construction time.
    pub initial_url: String,
    /// Session inactivity timeout.
    pub session_timeout: Duration,
}

impl TrackerConfig {
    pub fn new(endpoint: impl Into<String>, initial_url: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            initial_url: initial_url.into(),
            session_timeout: Duration::minutes(SESSION_TIMEOUT_MINUTES),
        }
    }

    pub fn with_session_timeout(mut self, timeout: Duration) -> Self {
        self.session_timeout = timeout;
        self
    }
}
