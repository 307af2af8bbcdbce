use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use super::records::{PlanRecord, TaskRecord};
use super::streak::consecutive_day_streak;
use super::window::DateWindow;

/// Category label for tasks without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CompletionRate {
    pub completed: u32,
    pub total: u32,
    /// Rounded percentage; 0 when `total` is 0.
    pub overall: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStat {
    pub category: String,
    pub completed: u32,
    pub total: u32,
    pub rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCompletion {
    pub category: String,
    pub completed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCompletion {
    pub date: NaiveDate,
    pub total_completed: u32,
    pub total_incomplete: u32,
    pub per_category_completed: Vec<CategoryCompletion>,
}

/// Summary metrics for one lookback window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsSummary {
    pub window: DateWindow,
    /// False when the window holds no tasks; callers render an empty state.
    pub has_data: bool,
    pub completion_rate: CompletionRate,
    pub category_breakdown: Vec<CategoryStat>,
    /// One entry per day of the window; empty when `has_data` is false.
    pub daily_completions: Vec<DailyCompletion>,
    pub planning_streak: u32,
    pub execution_streak: u32,
    /// `None` when the window holds no MIT tasks.
    pub mit_completion_rate: Option<u32>,
}

fn percent(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(part) / f64::from(total) * 100.0).round() as u32
}

fn category_label(record: &TaskRecord) -> String {
    record
        .task
        .category
        .name()
        .unwrap_or(UNCATEGORIZED)
        .to_string()
}

#[derive(Default)]
struct Counter {
    completed: u32,
    total: u32,
}

impl Counter {
    fn add(&mut self, completed: bool) {
        self.total += 1;
        if completed {
            self.completed += 1;
        }
    }
}

/// Aggregate task and plan history into summary metrics.
///
/// Completion, category and MIT figures only consider tasks planned inside
/// `window`. Streaks look at the whole history passed in and count backward
/// from `window.end`.
pub fn aggregate(window: DateWindow, tasks: &[TaskRecord], plans: &[PlanRecord]) -> AnalyticsSummary {
    let in_window: Vec<&TaskRecord> = tasks
        .iter()
        .filter(|r| window.contains(r.plan_date))
        .collect();

    let mut overall = Counter::default();
    let mut mit = Counter::default();
    let mut by_category: BTreeMap<String, Counter> = BTreeMap::new();
    for record in &in_window {
        let done = record.task.is_completed();
        overall.add(done);
        if record.task.is_mit {
            mit.add(done);
        }
        by_category.entry(category_label(record)).or_default().add(done);
    }

    let mut category_breakdown: Vec<CategoryStat> = by_category
        .into_iter()
        .map(|(category, c)| CategoryStat {
            category,
            completed: c.completed,
            total: c.total,
            rate: percent(c.completed, c.total),
        })
        .collect();
    category_breakdown.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));

    let has_data = overall.total > 0;
    let daily_completions = if has_data {
        daily_completions(window, &in_window)
    } else {
        Vec::new()
    };

    AnalyticsSummary {
        window,
        has_data,
        completion_rate: CompletionRate {
            completed: overall.completed,
            total: overall.total,
            overall: percent(overall.completed, overall.total),
        },
        category_breakdown,
        daily_completions,
        planning_streak: planning_streak(window.end, tasks, plans),
        execution_streak: execution_streak(window.end, tasks),
        mit_completion_rate: (mit.total > 0).then(|| percent(mit.completed, mit.total)),
    }
}

fn daily_completions(window: DateWindow, in_window: &[&TaskRecord]) -> Vec<DailyCompletion> {
    window
        .days()
        .map(|date| {
            let mut completed = 0;
            let mut incomplete = 0;
            let mut per_category: BTreeMap<String, u32> = BTreeMap::new();
            for record in in_window.iter().filter(|r| r.plan_date == date) {
                if record.task.is_completed() {
                    completed += 1;
                    *per_category.entry(category_label(record)).or_default() += 1;
                } else {
                    incomplete += 1;
                }
            }
            DailyCompletion {
                date,
                total_completed: completed,
                total_incomplete: incomplete,
                per_category_completed: per_category
                    .into_iter()
                    .map(|(category, completed)| CategoryCompletion { category, completed })
                    .collect(),
            }
        })
        .collect()
}

/// Days with a plan that holds at least one task.
fn planning_streak(today: NaiveDate, tasks: &[TaskRecord], plans: &[PlanRecord]) -> u32 {
    let days_with_tasks: BTreeSet<NaiveDate> = tasks.iter().map(|r| r.plan_date).collect();
    let planned: BTreeSet<NaiveDate> = plans
        .iter()
        .map(|p| p.plan_date)
        .filter(|d| days_with_tasks.contains(d))
        .collect();
    consecutive_day_streak(&planned, today)
}

/// Days where at least one planned task was completed.
fn execution_streak(today: NaiveDate, tasks: &[TaskRecord]) -> u32 {
    let executed: BTreeSet<NaiveDate> = tasks
        .iter()
        .filter(|r| r.task.is_completed())
        .map(|r| r.plan_date)
        .collect();
    consecutive_day_streak(&executed, today)
}
