//! Consecutive-day streaks.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Count consecutive active days backward from `today`.
///
/// `today` may still be empty (the day is not over), in which case counting
/// starts from yesterday. Any other gap ends the streak.
pub fn consecutive_day_streak(active_days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut day = if active_days.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(prev) => prev,
            None => return 0,
        }
    };

    let mut streak = 0u32;
    while active_days.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    #[test]
    fn empty_history_has_no_streak() {
        assert_eq!(consecutive_day_streak(&BTreeSet::new(), date(10)), 0);
    }

    #[test]
    fn counts_back_from_today() {
        let days: BTreeSet<_> = [date(8), date(9), date(10)].into_iter().collect();
        assert_eq!(consecutive_day_streak(&days, date(10)), 3);
    }

    #[test]
    fn unfinished_today_does_not_break_streak() {
        let days: BTreeSet<_> = [date(8), date(9)].into_iter().collect();
        assert_eq!(consecutive_day_streak(&days, date(10)), 2);
    }

    #[test]
    fn gap_resets_streak() {
        let days: BTreeSet<_> = [date(5), date(6), date(9), date(10)].into_iter().collect();
        assert_eq!(consecutive_day_streak(&days, date(10)), 2);

        let stale: BTreeSet<_> = [date(6), date(7)].into_iter().collect();
        assert_eq!(consecutive_day_streak(&stale, date(10)), 0);
    }
}
