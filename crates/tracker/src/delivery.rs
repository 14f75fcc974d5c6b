//! Best-effort event delivery.
//!
//! Delivery is at-most-once: one attempt, no retry, no acknowledgment
//! awaited by the capturing code path. A failed or interrupted send is
//! simply lost. Failures are observed only via telemetry counters.

use analytics_core::{Error, Event, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use telemetry::metrics;
use tracing::debug;
use url::Url;

/// One-shot event transmission.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, event: &Event) -> Result<()>;
}

/// HTTP transport posting JSON to the ingest endpoint.
///
/// The client keeps connections alive and bounds each attempt with a
/// short timeout so a slow backend cannot hold up page teardown.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::validation(format!("invalid ingest endpoint: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| Error::delivery(e.to_string()))?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, event: &Event) -> Result<()> {
        self.client
            .post(self.endpoint.clone())
            .json(event)
            .send()
            .await
            .map_err(|e| Error::delivery(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::delivery(e.to_string()))?;
        Ok(())
    }
}

/// Fire-and-forget dispatcher over a [`Transport`].
#[derive(Clone)]
pub struct Delivery {
    transport: Arc<dyn Transport>,
}

impl Delivery {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Sends an event without blocking the caller. The task handle is
    /// dropped: a send still in flight at teardown is lost, and a
    /// failure only increments `deliveries_failed`.
    pub fn dispatch(&self, event: Event) {
        metrics().deliveries_attempted.inc();
        let transport = self.transport.clone();
        tokio::spawn(async move {
            if let Err(e) = transport.send(&event).await {
                metrics().deliveries_failed.inc();
                debug!(error = %e, "Event delivery failed");
            }
        });
    }
}
