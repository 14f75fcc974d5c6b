//! Session identity management.
//!
//! A session identity is a `(session_id, last_activity)` pair held in
//! client-local storage. The id is reused while the gap since the last
//! activity stays under the inactivity timeout; otherwise a fresh id
//! is minted. Storage is injectable so the timeout logic is testable
//! without a real browsing context, and a failing storage degrades to
//! an in-memory fallback instead of breaking capture.

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use telemetry::metrics;
use tracing::{debug, warn};
use uuid::Uuid;

/// Storage key for the session id.
pub const SESSION_ID_KEY: &str = "analytics_session_id";
/// Storage key for the last-activity instant (unix millis).
pub const LAST_ACTIVITY_KEY: &str = "analytics_last_activity";

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock advanced by hand. Lets tests cross the inactivity timeout
/// without sleeping.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now = *now + by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Client-local persistent key/value storage.
///
/// `set` reports failure with `false` rather than an error; the
/// identity manager treats any failure as permanent for the lifetime
/// of the page and switches to its in-memory fallback.
pub trait IdentityStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
}

/// In-memory storage; also the fallback when host storage fails.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries.lock().insert(key.to_string(), value.to_string());
        true
    }
}

/// Owns the session-id lifecycle. No network interaction; never fails.
pub struct SessionIdentity {
    storage: Arc<dyn IdentityStorage>,
    fallback: MemoryStorage,
    degraded: AtomicBool,
    clock: Arc<dyn Clock>,
    timeout: Duration,
}

impl SessionIdentity {
    pub fn new(storage: Arc<dyn IdentityStorage>, clock: Arc<dyn Clock>, timeout: Duration) -> Self {
        Self {
            storage,
            fallback: MemoryStorage::new(),
            degraded: AtomicBool::new(false),
            clock,
            timeout,
        }
    }

    /// Returns the current session id, minting a fresh one when none
    /// is stored or the inactivity timeout has elapsed. Every call
    /// renews the last-activity instant.
    pub fn get_or_create(&self) -> String {
        let now = self.clock.now();
        let stored_id = self.read(SESSION_ID_KEY);
        let last_activity = self
            .read(LAST_ACTIVITY_KEY)
            .and_then(|v| v.parse::<i64>().ok());

        let expired = match last_activity {
            Some(ms) => now.timestamp_millis() - ms > self.timeout.num_milliseconds(),
            None => true,
        };

        let id = match stored_id {
            Some(id) if !expired => id,
            _ => {
                let id = mint_session_id(now);
                metrics().sessions_minted.inc();
                debug!(session_id = %id, "Minted session id");
                self.write(SESSION_ID_KEY, &id);
                id
            }
        };

        self.write(LAST_ACTIVITY_KEY, &now.timestamp_millis().to_string());
        id
    }

    fn read(&self, key: &str) -> Option<String> {
        if self.degraded.load(Ordering::Relaxed) {
            self.fallback.get(key)
        } else {
            self.storage.get(key)
        }
    }

    fn write(&self, key: &str, value: &str) {
        if self.degraded.load(Ordering::Relaxed) {
            self.fallback.set(key, value);
            return;
        }
        if !self.storage.set(key, value) {
            warn!("Host storage write failed; falling back to in-memory session state");
            self.degrade();
            self.fallback.set(key, value);
        }
    }

    /// Copies whatever the host storage still serves into the fallback
    /// so the session survives the switch.
    fn degrade(&self) {
        self.degraded.store(true, Ordering::Relaxed);
        for key in [SESSION_ID_KEY, LAST_ACTIVITY_KEY] {
            if let Some(value) = self.storage.get(key) {
                self.fallback.set(key, &value);
            }
        }
    }
}

/// Time-based prefix plus a random suffix. Format and entropy are an
/// implementation detail, not a contract.
fn mint_session_id(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("sess_{}_{}", now.timestamp_millis(), &suffix[..9])
}
