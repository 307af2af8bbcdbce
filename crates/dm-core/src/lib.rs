//! # dm-core
//!
//! Core domain models and business logic for Domani.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod analytics;
pub mod app_dirs;
pub mod config;
pub mod ports;
pub mod task;
pub mod tutorial;

// Re-export commonly used types at the crate root
pub use analytics::{AnalyticsSummary, DateWindow, PlanRecord, TaskRecord};
pub use config::AppConfig;
pub use task::{CategoryRef, DayTheme, Priority, Task};
pub use tutorial::{
    PersistedTutorialPrefs, TutorialEvent, TutorialInteraction, TutorialSnapshot, TutorialState,
    TutorialStep,
};
