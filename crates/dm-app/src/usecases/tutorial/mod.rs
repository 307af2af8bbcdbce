//! Tutorial use cases
//!
//! The controller owns the tutorial session and persisted flags. Everything
//! else in here drives it: per-screen advancement helpers, the lifecycle
//! controller reacting to app state and navigation, and the target registry
//! measuring the element the overlay spotlights.

pub mod advancement;
mod context;
pub mod controller;
pub mod lifecycle;
pub mod targets;
pub mod timings;

pub use advancement::TutorialAdvancement;
pub use controller::TutorialController;
pub use lifecycle::{AppState, PlatformEvent, TutorialLifecycleController};
pub use targets::TutorialTargetRegistry;
pub use timings::TutorialTimings;
