// tests/support/mocks/time.rs
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use recruit_admin_core::application::ports::time::Clock;

/// Fixed timestamp shared by the deterministic clocks.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2025-11-14T02:50:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Clone)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(fixed_now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
