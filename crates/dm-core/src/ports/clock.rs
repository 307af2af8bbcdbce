use chrono::NaiveDate;

pub trait ClockPort: Send + Sync {
    /// Current calendar day in the user's local time zone.
    fn today(&self) -> NaiveDate;
}
