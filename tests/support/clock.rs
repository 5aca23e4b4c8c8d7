// tests/support/clock.rs
use article_api::application::ports::time::Clock;
use chrono::{DateTime, Duration, TimeZone, Utc};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};

pub static BASE_TIME: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap());

/// Advances one second per call so insertion order equals timestamp order.
#[derive(Default)]
pub struct StepClock {
    ticks: AtomicI64,
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        *BASE_TIME + Duration::seconds(tick)
    }
}

/// Always reports `BASE_TIME`.
pub struct FrozenClock;

impl Clock for FrozenClock {
    fn now(&self) -> DateTime<Utc> {
        *BASE_TIME
    }
}
