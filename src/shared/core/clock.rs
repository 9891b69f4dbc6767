// Wall clock port.
//
// Archival compares an activity's calendar date and 12-hour end time against
// "now", so the clock is local, naive wall time. Tests swap in a fixed clock.

use chrono::{Local, NaiveDateTime};

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
