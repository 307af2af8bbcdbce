//! Day-theme inference.
//!
//! Each task is tagged with a theme derived from its category, then the
//! tags are tallied to pick the day's overall theme.

use serde::{Deserialize, Serialize};

use super::model::{CategoryRef, Task};

/// Coarse label summarising a day's planned tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayTheme {
    Work,
    Wellness,
    Personal,
    Learning,
    Balanced,
}

/// Display data for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayThemeInfo {
    pub theme: DayTheme,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub accent_color: &'static str,
}

impl DayTheme {
    /// Themes a single task can be tagged with.
    pub const TAGGABLE: [DayTheme; 4] = [
        DayTheme::Work,
        DayTheme::Wellness,
        DayTheme::Personal,
        DayTheme::Learning,
    ];

    pub fn info(self) -> DayThemeInfo {
        let (title, subtitle, icon, accent_color) = match self {
            DayTheme::Work => ("Focus Day", "Deep work ahead", "briefcase", "#3B82F6"),
            DayTheme::Wellness => ("Recharge Day", "Take care of yourself", "heart", "#10B981"),
            DayTheme::Personal => ("Life Admin Day", "Handle what matters at home", "home", "#F59E0B"),
            DayTheme::Learning => ("Growth Day", "Learn something new", "book", "#8B5CF6"),
            DayTheme::Balanced => ("Balanced Day", "A bit of everything", "sparkles", "#6B7280"),
        };
        DayThemeInfo {
            theme: self,
            title,
            subtitle,
            icon,
            accent_color,
        }
    }
}

const WORK_KEYWORDS: &[&str] = &[
    "work", "job", "office", "meeting", "project", "client", "career", "business", "email",
];
const WELLNESS_KEYWORDS: &[&str] = &[
    "health", "fitness", "gym", "workout", "exercise", "yoga", "meditat", "wellness", "self-care",
    "sleep",
];
const LEARNING_KEYWORDS: &[&str] = &[
    "learn", "study", "read", "course", "class", "school", "education", "book", "practice",
];

fn system_theme(name: &str) -> Option<DayTheme> {
    match name.to_ascii_lowercase().as_str() {
        "work" => Some(DayTheme::Work),
        "wellness" | "health" | "fitness" => Some(DayTheme::Wellness),
        "personal" | "home" | "errands" | "family" => Some(DayTheme::Personal),
        "learning" | "education" => Some(DayTheme::Learning),
        _ => None,
    }
}

fn keyword_theme(name: &str) -> Option<DayTheme> {
    let lowered = name.to_lowercase();
    // "workout" contains "work", so wellness goes first.
    if WELLNESS_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return Some(DayTheme::Wellness);
    }
    if WORK_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return Some(DayTheme::Work);
    }
    if LEARNING_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return Some(DayTheme::Learning);
    }
    None
}

/// Theme tag for a single task's category.
pub fn theme_for_category(category: &CategoryRef) -> DayTheme {
    let exact = match category {
        CategoryRef::System(name) => system_theme(name),
        _ => None,
    };
    exact
        .or_else(|| category.name().and_then(keyword_theme))
        .unwrap_or(DayTheme::Personal)
}

/// Per-theme task counts for one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeTally {
    counts: [usize; 4],
}

impl ThemeTally {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut tally = Self::default();
        for task in tasks {
            tally.add(theme_for_category(&task.category));
        }
        tally
    }

    fn slot(theme: DayTheme) -> Option<usize> {
        DayTheme::TAGGABLE.iter().position(|t| *t == theme)
    }

    pub fn add(&mut self, theme: DayTheme) {
        if let Some(slot) = Self::slot(theme) {
            self.counts[slot] += 1;
        }
    }

    pub fn count(&self, theme: DayTheme) -> usize {
        Self::slot(theme).map(|slot| self.counts[slot]).unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Winning theme: strict majority, else a unique leader, else balanced.
    pub fn winner(&self) -> DayTheme {
        let total = self.total();
        if total == 0 {
            return DayTheme::Balanced;
        }

        if let Some(theme) = DayTheme::TAGGABLE
            .iter()
            .copied()
            .find(|t| self.count(*t) * 2 > total)
        {
            return theme;
        }

        let best = DayTheme::TAGGABLE
            .iter()
            .map(|t| self.count(*t))
            .max()
            .unwrap_or(0);
        let mut leaders = DayTheme::TAGGABLE
            .iter()
            .copied()
            .filter(|t| self.count(*t) == best);
        match (leaders.next(), leaders.next()) {
            (Some(theme), None) => theme,
            _ => DayTheme::Balanced,
        }
    }
}

/// Infer the theme of a day from its tasks.
pub fn classify_day(tasks: &[Task]) -> DayThemeInfo {
    let tally = ThemeTally::from_tasks(tasks);
    let theme = tally.winner();
    tracing::debug!(tasks = tally.total(), theme = ?theme, "classified day theme");
    theme.info()
}
