//! Business logic use cases
//!
//! [TutorialController]  ← advancement / lifecycle / target registry
//!
//! [SummarizePlan]       → planning + today screens
//! [GetAnalyticsSummary] → analytics screen

pub mod analytics;
pub mod plan;
pub mod tutorial;

pub use analytics::GetAnalyticsSummary;
pub use plan::SummarizePlan;
pub use tutorial::{TutorialAdvancement, TutorialController, TutorialLifecycleController, TutorialTargetRegistry};
