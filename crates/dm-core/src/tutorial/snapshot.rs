use serde::Serialize;

use super::prefs::PersistedTutorialPrefs;
use super::state_machine::TutorialState;
use super::step::TutorialStep;

/// Session-scoped part of the tutorial; reset on every cold start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTutorialState {
    pub is_active: bool,
    pub current_step: Option<TutorialStep>,
    pub paused_step: Option<TutorialStep>,
}

impl From<TutorialState> for SessionTutorialState {
    fn from(state: TutorialState) -> Self {
        Self {
            is_active: state.is_active(),
            current_step: state.current_step(),
            paused_step: state.paused_step(),
        }
    }
}

/// Read model handed to UI screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialSnapshot {
    pub state: TutorialState,
    #[serde(flatten)]
    pub session: SessionTutorialState,
    #[serde(flatten)]
    pub prefs: PersistedTutorialPrefs,
}

impl TutorialSnapshot {
    pub fn new(state: TutorialState, prefs: PersistedTutorialPrefs) -> Self {
        Self {
            state,
            session: state.into(),
            prefs,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active
    }

    pub fn current_step(&self) -> Option<TutorialStep> {
        self.session.current_step
    }

    pub fn paused_step(&self) -> Option<TutorialStep> {
        self.session.paused_step
    }

    pub fn has_completed_tutorial(&self) -> bool {
        self.prefs.has_completed_tutorial
    }

    pub fn abandon_count(&self) -> u32 {
        self.prefs.abandon_count
    }
}
