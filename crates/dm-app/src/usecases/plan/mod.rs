//! Plan use cases

pub mod summarize;

pub use summarize::{PlanError, PlanSummary, SummarizePlan};
