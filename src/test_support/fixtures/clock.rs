// Settable clock for tests that depend on "now".

use crate::shared::core::clock::Clock;
use chrono::{Duration, NaiveDateTime};
use std::sync::Mutex;

pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

#[allow(dead_code)]
impl FixedClock {
    /// Parses `YYYY-MM-DD HH:MM:SS`.
    pub fn at(raw: &str) -> Self {
        let now = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap();
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance_minutes(&self, minutes: i64) {
        let mut guard = self.now.lock().unwrap();
        *guard += Duration::minutes(minutes);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap()
    }
}

#[cfg(test)]
mod fixed_clock_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_move_only_when_told() {
        let clock = FixedClock::at("2023-08-15 09:00:00");
        let start = clock.now();
        assert_eq!(clock.now(), start);
        clock.advance_minutes(90);
        assert_eq!(clock.now().format("%H:%M").to_string(), "10:30");
    }
}
