//! Client-side collector for the Sightline analytics pipeline.
//!
//! Owns the session-id lifecycle, captures page-view and click
//! activity, and ships events to the backend with best-effort,
//! fire-and-forget delivery. Nothing in this crate ever raises an
//! error into host code after construction: delivery failures are
//! counted in telemetry and dropped.

pub mod capture;
pub mod config;
pub mod delivery;
pub mod identity;

pub use capture::{ClientEnv, Tracker};
pub use config::TrackerConfig;
pub use delivery::{Delivery, HttpTransport, Transport};
pub use identity::{Clock, IdentityStorage, ManualClock, MemoryStorage, SessionIdentity, SystemClock};
