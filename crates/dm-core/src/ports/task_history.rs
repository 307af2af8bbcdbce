use async_trait::async_trait;
use chrono::NaiveDate;

use crate::analytics::{DateWindow, PlanRecord, TaskRecord};

/// Read access to the user's task and plan history held by the backend.
#[async_trait]
pub trait TaskHistoryPort: Send + Sync {
    /// Tasks planned for any day in `window`.
    async fn tasks_in(&self, window: DateWindow) -> anyhow::Result<Vec<TaskRecord>>;

    /// Plans for any day in `window`.
    async fn plans_in(&self, window: DateWindow) -> anyhow::Result<Vec<PlanRecord>>;

    async fn tasks_on(&self, date: NaiveDate) -> anyhow::Result<Vec<TaskRecord>> {
        self.tasks_in(DateWindow { start: date, end: date }).await
    }
}
