//! Analytics domain module.
//!
//! Pure aggregation over task and plan records already fetched for a
//! lookback window. Nothing here performs I/O.

mod aggregator;
mod records;
pub mod streak;
mod window;

pub use aggregator::{
    aggregate, AnalyticsSummary, CategoryCompletion, CategoryStat, CompletionRate, DailyCompletion,
    UNCATEGORIZED,
};
pub use records::{PlanRecord, TaskRecord};
pub use streak::consecutive_day_streak;
pub use window::{DateWindow, DEFAULT_LOOKBACK_DAYS};
