//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The core never touches the file
//! system, the hosted backend or the UI toolkit directly; it only sees
//! these traits.

pub mod app_dirs;
mod clock;
pub mod errors;
pub mod key_value;
pub mod layout;
pub mod task_history;
pub mod tutorial_prefs;

pub use app_dirs::AppDirsPort;
pub use clock::ClockPort;
pub use errors::AppDirsError;
pub use key_value::{KeyValueStoreError, KeyValueStorePort};
pub use layout::{ElementMeasurePort, ScrollPort};
pub use task_history::TaskHistoryPort;
pub use tutorial_prefs::TutorialPrefsPort;

#[cfg(any(test, feature = "test-support"))]
pub use tutorial_prefs::InMemoryTutorialPrefs;
