use chrono::Local;
use std::fmt::Debug;

// Source of the time strings stamped on journal entries.
pub trait Clock: Debug {
    fn now(&self) -> String;
}

// Wall-clock local time, e.g. "21:15:02".
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> String {
        Local::now().format("%H:%M:%S").to_string()
    }
}

// Always returns the same time string.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}
