use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use dm_core::analytics::{aggregate, AnalyticsSummary, DateWindow, DEFAULT_LOOKBACK_DAYS};
use dm_core::ports::{ClockPort, TaskHistoryPort};

/// How far back history is fetched so streaks can run past the lookback window.
pub const STREAK_HISTORY_DAYS: u32 = 90;

/// Longest lookback the analytics screen will chart.
pub const MAX_LOOKBACK_DAYS: u32 = 365;

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("failed to load task history: {0}")]
    TaskHistory(String),

    #[error("failed to load plan history: {0}")]
    PlanHistory(String),
}

/// Use case for building the analytics screen summary.
///
/// ## Behavior
/// - Window ends today and spans `lookback_days` days (7 when unset,
///   capped at [`MAX_LOOKBACK_DAYS`])
/// - Streaks use up to [`STREAK_HISTORY_DAYS`] of history
/// - An empty window yields `has_data == false` instead of an error
pub struct GetAnalyticsSummary {
    history: Arc<dyn TaskHistoryPort>,
    clock: Arc<dyn ClockPort>,
    lookback_days: u32,
}

impl GetAnalyticsSummary {
    pub fn new(history: Arc<dyn TaskHistoryPort>, clock: Arc<dyn ClockPort>, lookback_days: u32) -> Self {
        let lookback_days = match lookback_days {
            0 => DEFAULT_LOOKBACK_DAYS,
            days if days > MAX_LOOKBACK_DAYS => {
                warn!(requested = days, max = MAX_LOOKBACK_DAYS, "Analytics lookback capped");
                MAX_LOOKBACK_DAYS
            }
            days => days,
        };
        Self {
            history,
            clock,
            lookback_days,
        }
    }

    pub fn lookback_days(&self) -> u32 {
        self.lookback_days
    }

    pub async fn execute(&self) -> Result<AnalyticsSummary, AnalyticsError> {
        let today = self.clock.today();
        let window = DateWindow::ending_at(today, self.lookback_days);
        let history_window = DateWindow::ending_at(today, self.lookback_days.max(STREAK_HISTORY_DAYS));
        let span = info_span!(
            "usecase.get_analytics_summary.execute",
            start = %window.start,
            end = %window.end,
        );

        async {
            let tasks = self
                .history
                .tasks_in(history_window)
                .await
                .map_err(|e| AnalyticsError::TaskHistory(e.to_string()))?;
            let plans = self
                .history
                .plans_in(history_window)
                .await
                .map_err(|e| AnalyticsError::PlanHistory(e.to_string()))?;

            let summary = aggregate(window, &tasks, &plans);
            info!(
                has_data = summary.has_data,
                completion = summary.completion_rate.overall,
                planning_streak = summary.planning_streak,
                execution_streak = summary.execution_streak,
                "Analytics summary computed"
            );
            Ok(summary)
        }
        .instrument(span)
        .await
    }
}
