use chrono::{Local, NaiveDate};
use dm_core::ports::ClockPort;

/// Clock reading the local calendar day.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
