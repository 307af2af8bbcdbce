use serde::{Deserialize, Serialize};

use crate::task::Priority;

/// One checkpoint of the onboarding sequence, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TutorialStep {
    Welcome,
    AddTaskButton,
    TitleInput,
    CategorySelector,
    CreateCategory,
    PrioritySelector,
    TopPriority,
    DayToggle,
    TaskCreated,
    TodayScreen,
    Cleanup,
    Completion,
}

/// User interaction that may advance the tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TutorialInteraction {
    AddTaskButtonTapped,
    TitleInputBlurred,
    CategoryChosen,
    NewCategoryTapped,
    CategoryCreated,
    PriorityChosen(Priority),
    TopPriorityAcknowledged,
    DayToggled,
    /// "Next" on the overlay of an informational step.
    Continue,
}

impl TutorialStep {
    pub const ALL: [TutorialStep; 12] = [
        TutorialStep::Welcome,
        TutorialStep::AddTaskButton,
        TutorialStep::TitleInput,
        TutorialStep::CategorySelector,
        TutorialStep::CreateCategory,
        TutorialStep::PrioritySelector,
        TutorialStep::TopPriority,
        TutorialStep::DayToggle,
        TutorialStep::TaskCreated,
        TutorialStep::TodayScreen,
        TutorialStep::Cleanup,
        TutorialStep::Completion,
    ];

    pub fn is_final(self) -> bool {
        self == TutorialStep::Completion
    }

    /// Step reached from `self` through `interaction`, if that edge exists.
    pub fn successor(self, interaction: TutorialInteraction) -> Option<TutorialStep> {
        use TutorialInteraction as I;
        use TutorialStep as S;

        match (self, interaction) {
            (S::Welcome, I::Continue) => Some(S::AddTaskButton),
            (S::AddTaskButton, I::AddTaskButtonTapped) => Some(S::TitleInput),
            (S::TitleInput, I::TitleInputBlurred) => Some(S::CategorySelector),
            (S::CategorySelector, I::CategoryChosen) => Some(S::PrioritySelector),
            (S::CategorySelector, I::NewCategoryTapped) => Some(S::CreateCategory),
            (S::CreateCategory, I::CategoryCreated) => Some(S::PrioritySelector),
            (S::PrioritySelector, I::PriorityChosen(Priority::Top)) => Some(S::TopPriority),
            (S::PrioritySelector, I::PriorityChosen(_)) => Some(S::Cleanup),
            (S::TopPriority, I::TopPriorityAcknowledged) => Some(S::Cleanup),
            (S::TopPriority, I::Continue) => Some(S::DayToggle),
            (S::DayToggle, I::DayToggled) => Some(S::Cleanup),
            (S::DayToggle, I::Continue) => Some(S::TaskCreated),
            (S::TaskCreated, I::Continue) => Some(S::TodayScreen),
            (S::TodayScreen, I::Continue) => Some(S::Cleanup),
            (S::Cleanup, I::Continue) => Some(S::Completion),
            _ => None,
        }
    }

    /// Whether `next` is reachable from `self` through any single interaction.
    pub fn can_advance_to(self, next: TutorialStep) -> bool {
        const PRIORITIES: [Priority; 4] =
            [Priority::Top, Priority::High, Priority::Medium, Priority::Low];

        let simple = [
            TutorialInteraction::AddTaskButtonTapped,
            TutorialInteraction::TitleInputBlurred,
            TutorialInteraction::CategoryChosen,
            TutorialInteraction::NewCategoryTapped,
            TutorialInteraction::CategoryCreated,
            TutorialInteraction::TopPriorityAcknowledged,
            TutorialInteraction::DayToggled,
            TutorialInteraction::Continue,
        ];
        simple
            .into_iter()
            .chain(PRIORITIES.into_iter().map(TutorialInteraction::PriorityChosen))
            .any(|interaction| self.successor(interaction) == Some(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interaction_table_edges() {
        use TutorialInteraction as I;
        use TutorialStep as S;

        let table = [
            (S::AddTaskButton, I::AddTaskButtonTapped, S::TitleInput),
            (S::TitleInput, I::TitleInputBlurred, S::CategorySelector),
            (S::CategorySelector, I::CategoryChosen, S::PrioritySelector),
            (S::CategorySelector, I::NewCategoryTapped, S::CreateCategory),
            (S::CreateCategory, I::CategoryCreated, S::PrioritySelector),
            (S::PrioritySelector, I::PriorityChosen(Priority::Top), S::TopPriority),
            (S::PrioritySelector, I::PriorityChosen(Priority::Medium), S::Cleanup),
            (S::TopPriority, I::TopPriorityAcknowledged, S::Cleanup),
            (S::DayToggle, I::DayToggled, S::Cleanup),
        ];

        for (from, interaction, to) in table {
            assert_eq!(from.successor(interaction), Some(to), "{from:?} + {interaction:?}");
        }
    }

    #[test]
    fn unrelated_interactions_have_no_successor() {
        assert_eq!(
            TutorialStep::TitleInput.successor(TutorialInteraction::AddTaskButtonTapped),
            None
        );
        assert_eq!(
            TutorialStep::Completion.successor(TutorialInteraction::Continue),
            None
        );
    }

    #[test]
    fn every_step_but_completion_can_advance() {
        for step in TutorialStep::ALL {
            let reachable = TutorialStep::ALL.iter().any(|next| step.can_advance_to(*next));
            assert_eq!(reachable, !step.is_final(), "{step:?}");
        }
    }

    #[test]
    fn every_step_but_welcome_is_reachable() {
        for step in TutorialStep::ALL {
            let reachable = TutorialStep::ALL.iter().any(|from| from.can_advance_to(step));
            assert_eq!(reachable, step != TutorialStep::Welcome, "{step:?}");
        }
    }

    #[test]
    fn can_advance_to_rejects_skipping_ahead() {
        assert!(TutorialStep::Welcome.can_advance_to(TutorialStep::AddTaskButton));
        assert!(!TutorialStep::Welcome.can_advance_to(TutorialStep::Completion));
        assert!(!TutorialStep::TitleInput.can_advance_to(TutorialStep::TitleInput));
    }

    #[test]
    fn steps_serialize_snake_case() {
        let json = serde_json::to_string(&TutorialStep::AddTaskButton).unwrap();
        assert_eq!(json, "\"add_task_button\"");
    }
}
