use std::sync::Arc;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::{info, info_span, Instrument};

use dm_core::ports::{ClockPort, TaskHistoryPort};
use dm_core::task::{classify_day, sort_by_priority, DayThemeInfo, Task};

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("failed to load tasks for {date}: {reason}")]
    Load { date: NaiveDate, reason: String },

    #[error("date out of range")]
    DateOutOfRange,
}

/// A day's plan as shown on the planning and today screens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub date: NaiveDate,
    pub theme: DayThemeInfo,
    /// Sorted by priority, then title.
    pub tasks: Vec<Task>,
    pub completed: usize,
}

/// Use case for building a day's plan summary: themed and priority ordered.
pub struct SummarizePlan {
    history: Arc<dyn TaskHistoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl SummarizePlan {
    pub fn new(history: Arc<dyn TaskHistoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { history, clock }
    }

    pub async fn execute(&self, date: NaiveDate) -> Result<PlanSummary, PlanError> {
        let span = info_span!("usecase.summarize_plan.execute", %date);

        async {
            let records = self
                .history
                .tasks_on(date)
                .await
                .map_err(|e| PlanError::Load {
                    date,
                    reason: e.to_string(),
                })?;
            let tasks: Vec<Task> = records
                .into_iter()
                .filter(|r| r.plan_date == date)
                .map(|r| r.task)
                .collect();

            let theme = classify_day(&tasks);
            let tasks = sort_by_priority(&tasks);
            let completed = tasks.iter().filter(|t| t.is_completed()).count();
            info!(theme = ?theme.theme, tasks = tasks.len(), completed, "Plan summarized");

            Ok(PlanSummary {
                date,
                theme,
                tasks,
                completed,
            })
        }
        .instrument(span)
        .await
    }

    pub async fn execute_today(&self) -> Result<PlanSummary, PlanError> {
        self.execute(self.clock.today()).await
    }

    /// Plans are made the evening before.
    pub async fn execute_tomorrow(&self) -> Result<PlanSummary, PlanError> {
        let tomorrow = self
            .clock
            .today()
            .checked_add_days(Days::new(1))
            .ok_or(PlanError::DateOutOfRange)?;
        self.execute(tomorrow).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dm_core::analytics::{DateWindow, PlanRecord, TaskRecord};
    use dm_core::task::{CategoryRef, DayTheme, Priority};

    struct StaticHistory(Vec<TaskRecord>);

    #[async_trait]
    impl TaskHistoryPort for StaticHistory {
        async fn tasks_in(&self, window: DateWindow) -> anyhow::Result<Vec<TaskRecord>> {
            Ok(self
                .0
                .iter()
                .filter(|r| window.contains(r.plan_date))
                .cloned()
                .collect())
        }

        async fn plans_in(&self, _window: DateWindow) -> anyhow::Result<Vec<PlanRecord>> {
            Ok(Vec::new())
        }
    }

    struct BrokenHistory;

    #[async_trait]
    impl TaskHistoryPort for BrokenHistory {
        async fn tasks_in(&self, _window: DateWindow) -> anyhow::Result<Vec<TaskRecord>> {
            anyhow::bail!("disk gone")
        }

        async fn plans_in(&self, _window: DateWindow) -> anyhow::Result<Vec<PlanRecord>> {
            anyhow::bail!("disk gone")
        }
    }

    struct FixedClock(NaiveDate);

    impl ClockPort for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    fn work(id: &str, title: &str, priority: Priority) -> Task {
        Task::new(id, title)
            .with_priority(priority)
            .with_category(CategoryRef::System("Work".into()))
    }

    fn summarizer(records: Vec<TaskRecord>) -> SummarizePlan {
        SummarizePlan::new(Arc::new(StaticHistory(records)), Arc::new(FixedClock(day(10))))
    }

    #[tokio::test]
    async fn tomorrow_plan_is_themed_and_sorted() {
        let uc = summarizer(vec![
            TaskRecord::new(day(11), work("1", "Email", Priority::Low)),
            TaskRecord::new(day(11), work("2", "Deck", Priority::Top)),
            TaskRecord::new(day(11), Task::new("3", "Laundry").with_priority(Priority::High)),
            TaskRecord::new(day(10), work("4", "Standup", Priority::Top)),
        ]);

        let summary = uc.execute_tomorrow().await.unwrap();

        assert_eq!(summary.date, day(11));
        assert_eq!(summary.theme.theme, DayTheme::Work);
        let ids: Vec<&str> = summary.tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
        assert_eq!(summary.completed, 0);
    }

    #[tokio::test]
    async fn empty_day_is_balanced() {
        let uc = summarizer(Vec::new());

        let summary = uc.execute_today().await.unwrap();

        assert_eq!(summary.date, day(10));
        assert_eq!(summary.theme.theme, DayTheme::Balanced);
        assert!(summary.tasks.is_empty());
    }

    #[tokio::test]
    async fn summary_payload_carries_theme_presentation() {
        let uc = summarizer(vec![TaskRecord::new(
            day(10),
            Task::new("1", "Yoga").with_category(CategoryRef::System("Health".into())),
        )]);

        let summary = uc.execute_today().await.unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["date"], "2026-05-10");
        assert_eq!(json["theme"]["theme"], "wellness");
        assert_eq!(json["theme"]["title"], DayTheme::Wellness.info().title);
        assert_eq!(json["tasks"][0]["id"], "1");
    }

    #[tokio::test]
    async fn load_failure_names_the_date() {
        let uc = SummarizePlan::new(Arc::new(BrokenHistory), Arc::new(FixedClock(day(10))));

        let err = uc.execute(day(3)).await.unwrap_err();

        assert!(matches!(err, PlanError::Load { date, .. } if date == day(3)));
        assert!(err.to_string().contains("disk gone"));
    }
}
