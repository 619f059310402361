// src/application/ports/time.rs
use chrono::{DateTime, Duration, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Whether `at` lies more than `ttl` in the past.
    fn is_expired(&self, at: DateTime<Utc>, ttl: Duration) -> bool {
        self.now() - at > ttl
    }
}
