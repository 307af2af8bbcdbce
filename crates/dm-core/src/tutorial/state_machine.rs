//! Tutorial state machine.
//!
//! Pure transition function `(state, event) -> (state, actions)`. Every legal
//! move is listed here; anything else leaves the state untouched and emits
//! no actions, so a stray UI event can never push the tutorial into a state
//! the flow does not allow.

use serde::{Deserialize, Serialize};

use super::step::{TutorialInteraction, TutorialStep};

/// Session state of the tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "step", rename_all = "snake_case")]
pub enum TutorialState {
    #[default]
    Inactive,
    Active(TutorialStep),
    Paused(TutorialStep),
    /// Terminal until an explicit reset.
    Completed,
}

impl TutorialState {
    pub fn is_active(&self) -> bool {
        matches!(self, TutorialState::Active(_))
    }

    pub fn current_step(&self) -> Option<TutorialStep> {
        match self {
            TutorialState::Active(step) => Some(*step),
            _ => None,
        }
    }

    pub fn paused_step(&self) -> Option<TutorialStep> {
        match self {
            TutorialState::Paused(step) => Some(*step),
            _ => None,
        }
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TutorialEvent {
    Start,
    /// Move to an explicitly named step; only legal successors are accepted.
    NextStep(TutorialStep),
    Interact(TutorialInteraction),
    Pause,
    ResumeOrRestart,
    Skip,
    Complete,
    Reset,
}

/// Side effects on the persisted prefs requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TutorialAction {
    MarkCompleted,
    RecordAbandon,
    ClearCompleted,
}

/// Pure tutorial state machine.
pub struct TutorialStateMachine;

impl TutorialStateMachine {
    pub fn transition(
        state: TutorialState,
        event: TutorialEvent,
    ) -> (TutorialState, Vec<TutorialAction>) {
        use TutorialState::{Active, Completed, Inactive, Paused};

        match (state, event) {
            (Inactive, TutorialEvent::Start) => (Active(TutorialStep::Welcome), Vec::new()),
            (Active(step), TutorialEvent::NextStep(next)) if step.can_advance_to(next) => {
                (Active(next), Vec::new())
            }
            (Active(step), TutorialEvent::Interact(interaction)) => match step.successor(interaction)
            {
                Some(next) => (Active(next), Vec::new()),
                None => (state, Vec::new()),
            },
            (Active(step), TutorialEvent::Pause) => (Paused(step), Vec::new()),
            (Paused(step), TutorialEvent::ResumeOrRestart) => (Active(step), Vec::new()),
            (Inactive, TutorialEvent::ResumeOrRestart) => {
                (Active(TutorialStep::Welcome), Vec::new())
            }
            (Active(step) | Paused(step), TutorialEvent::Skip) => {
                let mut actions = vec![TutorialAction::MarkCompleted];
                if !step.is_final() {
                    actions.push(TutorialAction::RecordAbandon);
                }
                (Completed, actions)
            }
            (Active(TutorialStep::Completion), TutorialEvent::Complete) => {
                (Completed, vec![TutorialAction::MarkCompleted])
            }
            (_, TutorialEvent::Reset) => (Inactive, vec![TutorialAction::ClearCompleted]),
            (state, _event) => (state, Vec::new()),
        }
    }
}
