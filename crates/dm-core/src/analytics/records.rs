use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// A task as stored in the history: the task plus the day it was planned for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub plan_date: NaiveDate,
    #[serde(flatten)]
    pub task: Task,
}

impl TaskRecord {
    pub fn new(plan_date: NaiveDate, task: Task) -> Self {
        Self { plan_date, task }
    }
}

/// A daily plan created the night before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub id: String,
    pub plan_date: NaiveDate,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl PlanRecord {
    pub fn new(id: impl Into<String>, plan_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            plan_date,
            created_at: None,
        }
    }
}
