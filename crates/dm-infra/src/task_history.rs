//! Task history read from a JSON export
//!
//! The hosted backend is out of reach for the headless build, so history is
//! read from an export file shaped as `{ "plans": [...], "tasks": [...] }`.
//! A missing file means no history yet.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs;
use tracing::debug;

use dm_core::analytics::{DateWindow, PlanRecord, TaskRecord};
use dm_core::ports::TaskHistoryPort;

pub const DEFAULT_TASKS_EXPORT_FILE: &str = "tasks.json";

#[derive(Debug, Default, Deserialize)]
struct TaskExport {
    #[serde(default)]
    plans: Vec<PlanRecord>,
    #[serde(default)]
    tasks: Vec<TaskRecord>,
}

pub struct JsonTaskHistoryRepository {
    path: PathBuf,
}

impl JsonTaskHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> anyhow::Result<TaskExport> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no task export yet");
                return Ok(TaskExport::default());
            }
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to read task export {}: {}",
                    self.path.display(),
                    e
                ))
            }
        };
        if content.trim().is_empty() {
            return Ok(TaskExport::default());
        }

        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse task export: {}", e))
    }
}

#[async_trait]
impl TaskHistoryPort for JsonTaskHistoryRepository {
    async fn tasks_in(&self, window: DateWindow) -> anyhow::Result<Vec<TaskRecord>> {
        let export = self.load().await?;
        Ok(export
            .tasks
            .into_iter()
            .filter(|r| window.contains(r.plan_date))
            .collect())
    }

    async fn plans_in(&self, window: DateWindow) -> anyhow::Result<Vec<PlanRecord>> {
        let export = self.load().await?;
        Ok(export
            .plans
            .into_iter()
            .filter(|p| window.contains(p.plan_date))
            .collect())
    }
}
