//! Analytics use cases

pub mod get_summary;

pub use get_summary::{AnalyticsError, GetAnalyticsSummary, MAX_LOOKBACK_DAYS, STREAK_HISTORY_DAYS};
