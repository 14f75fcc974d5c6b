//! Application state shared across handlers.

use event_store::{AggregationEngine, EventStore};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Event store (memory-backed in this binary and in tests).
    pub store: Arc<dyn EventStore>,
    /// Read-side aggregation over the same store.
    pub engine: AggregationEngine,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        let engine = AggregationEngine::new(store.clone());
        Self { store, engine }
    }
}
