//! Wall-clock abstraction.
//!
//! Lock expiry is recomputed from "now" at every check, so every caller that
//! needs the current time goes through a [`Clock`] rather than calling
//! `Utc::now()` inline. Handlers hold an `Arc<dyn Clock>` in application
//! state; integration tests swap in [`ManualClock`] and time-travel without
//! sleeping.

use std::sync::Mutex;

use chrono::Duration;

use crate::types::Timestamp;

/// Source of the current UTC time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Production clock backed by the system wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        chrono::Utc::now()
    }
}

/// Test clock that only moves when told to.
///
/// Starts at the given instant; `advance` shifts it forward so TTL-expiry
/// paths can be exercised deterministically.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().expect("clock mutex poisoned");
        *now += delta;
    }

    /// Set the clock to an absolute instant.
    pub fn set(&self, instant: Timestamp) {
        let mut now = self.now.lock().expect("clock mutex poisoned");
        *now = instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().expect("clock mutex poisoned")
    }
}
