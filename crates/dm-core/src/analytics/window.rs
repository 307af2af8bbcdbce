use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;

/// Inclusive range of calendar days ending at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Window of `days` calendar days ending at `end` (inclusive).
    ///
    /// A zero-day request is treated as a single day. Spans reaching past
    /// the earliest representable date start at [`NaiveDate::MIN`].
    pub fn ending_at(end: NaiveDate, days: u32) -> Self {
        let span = u64::from(days.max(1)) - 1;
        Self {
            start: end.checked_sub_days(Days::new(span)).unwrap_or(NaiveDate::MIN),
            end,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Days in the window, oldest first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    pub fn len(&self) -> usize {
        self.days().count()
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn seven_day_window_is_inclusive() {
        let window = DateWindow::ending_at(date(2026, 3, 7), 7);
        assert_eq!(window.start, date(2026, 3, 1));
        assert_eq!(window.len(), 7);
        assert!(window.contains(date(2026, 3, 1)));
        assert!(!window.contains(date(2026, 2, 28)));
    }

    #[test]
    fn window_crosses_month_boundaries() {
        let window = DateWindow::ending_at(date(2026, 3, 2), 7);
        let days: Vec<NaiveDate> = window.days().collect();
        assert_eq!(days.first(), Some(&date(2026, 2, 24)));
        assert_eq!(days.last(), Some(&date(2026, 3, 2)));
    }

    #[test]
    fn zero_days_means_one_day() {
        let window = DateWindow::ending_at(date(2026, 3, 2), 0);
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn oversized_span_clamps_to_earliest_date() {
        let window = DateWindow::ending_at(date(2026, 10, 19), 4_000_000_000);
        assert_eq!(window.start, NaiveDate::MIN);
        assert_eq!(window.end, date(2026, 10, 19));
        assert!(window.contains(date(1900, 1, 1)));
    }
}
