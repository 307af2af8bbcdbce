//! Tutorial domain module.
//!
//! Defines the onboarding tutorial: its ordered steps, the interaction table
//! that moves between them, and a pure state machine that owns every legal
//! transition. Persistence and timing live in the application layer.

mod prefs;
mod route;
mod snapshot;
pub mod state_machine;
mod step;
pub mod target;

pub use prefs::PersistedTutorialPrefs;
pub use route::{is_tutorial_route, TUTORIAL_ROUTES};
pub use snapshot::{SessionTutorialState, TutorialSnapshot};
pub use state_machine::{TutorialAction, TutorialEvent, TutorialState, TutorialStateMachine};
pub use step::{TutorialInteraction, TutorialStep};
pub use target::{Rect, ScrollPolicy, Viewport};
