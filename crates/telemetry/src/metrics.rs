//! In-process metrics counters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// A monotonically increasing counter.
#[derive(Debug, Default)]
pub struct Counter(AtomicU64);

impl Counter {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_by(&self, n: u64) {
        self.0.fetch_add(n, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Collected metrics for the pipeline.
#[derive(Debug, Default)]
pub struct Metrics {
    // Server-side ingest
    pub events_ingested: Counter,
    pub events_rejected: Counter,
    pub store_errors: Counter,

    // Client-side capture and delivery
    pub page_views_captured: Counter,
    pub clicks_captured: Counter,
    pub deliveries_attempted: Counter,
    pub deliveries_failed: Counter,
    pub sessions_minted: Counter,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a point-in-time snapshot.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            timestamp: Utc::now(),
            events_ingested: self.events_ingested.get(),
            events_rejected: self.events_rejected.get(),
            store_errors: self.store_errors.get(),
            page_views_captured: self.page_views_captured.get(),
            clicks_captured: self.clicks_captured.get(),
            deliveries_attempted: self.deliveries_attempted.get(),
            deliveries_failed: self.deliveries_failed.get(),
            sessions_minted: self.sessions_minted.get(),
        }
    }
}

/// A snapshot of metrics at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub timestamp: DateTime<Utc>,
    pub events_ingested: u64,
    pub events_rejected: u64,
    pub store_errors: u64,
    pub page_views_captured: u64,
    pub clicks_captured: u64,
    pub deliveries_attempted: u64,
    pub deliveries_failed: u64,
    pub sessions_minted: u64,
}

/// Global metrics registry.
pub static METRICS: std::sync::LazyLock<Metrics> = std::sync::LazyLock::new(Metrics::new);

/// Get the global metrics instance.
pub fn metrics() -> &'static Metrics {
    &METRICS
}
