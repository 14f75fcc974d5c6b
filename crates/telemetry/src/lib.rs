//! Internal telemetry for the Sightline analytics pipeline.
//!
//! Best-effort delivery and ingest failures are observable only here:
//! they never surface as errors to the host page or API callers.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::*;
pub use tracing_setup::*;
