//! Task domain module.
//!
//! Tasks are owned by the hosted backend; this module only models the
//! read-only shape the planner logic consumes, plus the pure helpers that
//! operate on it (day-theme inference and priority ordering).

mod model;
pub mod sort;
pub mod theme;

pub use model::{CategoryRef, Priority, Task};
pub use sort::sort_by_priority;
pub use theme::{classify_day, DayTheme, DayThemeInfo, ThemeTally};
