// tests/support/mocks/time.rs
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use quillpress::application::ports::time::Clock;
use std::sync::Mutex;

/// Deterministic timestamp shared by the service-level tests.
pub static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

#[derive(Default, Clone)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *FIXED_NOW
    }
}

/// A clock the test can move forward, for expiry scenarios.
pub struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(*FIXED_NOW),
        }
    }

    pub fn advance(&self, duration: chrono::Duration) {
        let mut now = self.now.lock().unwrap();
        *now += duration;
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
