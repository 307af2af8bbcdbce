use std::cmp::Ordering;

use super::model::{Priority, Task};

fn compare(a: &Task, b: &Task) -> Ordering {
    Priority::rank(a.priority)
        .cmp(&Priority::rank(b.priority))
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
}

/// Order tasks by priority tier, then case-insensitive title.
///
/// The sort is stable and the input slice is left untouched.
pub fn sort_by_priority(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(compare);
    sorted
}
