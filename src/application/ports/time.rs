// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of wall-clock time for stored timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
