use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority tier of a task.
///
/// Absence of a priority is modelled as `Option<Priority>::None` on [`Task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Top,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank of an optional priority. Lower ranks sort first.
    pub fn rank(priority: Option<Priority>) -> u8 {
        match priority {
            Some(Priority::Top) => 0,
            Some(Priority::High) => 1,
            Some(Priority::Medium) => 2,
            Some(Priority::Low) => 3,
            None => 4,
        }
    }
}

/// Where a task's category comes from.
///
/// The backend stores a system category and a user category as two optional
/// references; a task resolves to at most one of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum CategoryRef {
    /// Built-in category shipped with the app (e.g. "Work").
    System(String),
    /// Category created by the user, free-text name.
    User(String),
    #[default]
    None,
}

impl CategoryRef {
    pub fn name(&self) -> Option<&str> {
        match self {
            CategoryRef::System(name) | CategoryRef::User(name) => Some(name.as_str()),
            CategoryRef::None => None,
        }
    }
}

/// A planned task as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub category: CategoryRef,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Most important task of the day.
    #[serde(default)]
    pub is_mit: bool,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            priority: None,
            category: CategoryRef::None,
            completed_at: None,
            is_mit: false,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_category(mut self, category: CategoryRef) -> Self {
        self.category = category;
        self
    }

    pub fn completed(mut self, at: DateTime<Utc>) -> Self {
        self.completed_at = Some(at);
        self
    }

    pub fn mit(mut self) -> Self {
        self.is_mit = true;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}
