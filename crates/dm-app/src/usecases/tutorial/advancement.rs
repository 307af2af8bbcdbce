//! Advancement rules.
//!
//! One helper per UI interaction that can move the tutorial forward. Each
//! helper only fires when the tutorial is active on the step the interaction
//! belongs to; otherwise it is a silent no-op, so stray events from screens
//! used outside the tutorial cannot disturb it.

use std::sync::Arc;

use tracing::debug;

use dm_core::task::Priority;
use dm_core::tutorial::{TutorialInteraction, TutorialSnapshot, TutorialStep};

use super::controller::TutorialController;

pub struct TutorialAdvancement {
    controller: Arc<TutorialController>,
}

impl TutorialAdvancement {
    pub fn new(controller: Arc<TutorialController>) -> Self {
        Self { controller }
    }

    async fn advance_from(
        &self,
        expected: TutorialStep,
        interaction: TutorialInteraction,
    ) -> TutorialSnapshot {
        let snapshot = self.controller.snapshot().await;
        if snapshot.current_step() != Some(expected) {
            debug!(
                expected = ?expected,
                current = ?snapshot.current_step(),
                interaction = ?interaction,
                "tutorial advancement guard not met"
            );
            return snapshot;
        }
        self.controller.interact(interaction).await
    }

    pub async fn advance_from_add_task_button(&self) -> TutorialSnapshot {
        self.advance_from(
            TutorialStep::AddTaskButton,
            TutorialInteraction::AddTaskButtonTapped,
        )
        .await
    }

    pub async fn advance_from_title_input(&self) -> TutorialSnapshot {
        self.advance_from(
            TutorialStep::TitleInput,
            TutorialInteraction::TitleInputBlurred,
        )
        .await
    }

    pub async fn advance_from_category_selector(&self) -> TutorialSnapshot {
        self.advance_from(
            TutorialStep::CategorySelector,
            TutorialInteraction::CategoryChosen,
        )
        .await
    }

    pub async fn advance_to_create_category(&self) -> TutorialSnapshot {
        self.advance_from(
            TutorialStep::CategorySelector,
            TutorialInteraction::NewCategoryTapped,
        )
        .await
    }

    pub async fn advance_from_create_category(&self) -> TutorialSnapshot {
        self.advance_from(
            TutorialStep::CreateCategory,
            TutorialInteraction::CategoryCreated,
        )
        .await
    }

    pub async fn advance_from_priority_selector(&self, priority: Priority) -> TutorialSnapshot {
        self.advance_from(
            TutorialStep::PrioritySelector,
            TutorialInteraction::PriorityChosen(priority),
        )
        .await
    }

    pub async fn advance_from_top_priority(&self) -> TutorialSnapshot {
        self.advance_from(
            TutorialStep::TopPriority,
            TutorialInteraction::TopPriorityAcknowledged,
        )
        .await
    }

    pub async fn advance_from_day_toggle(&self) -> TutorialSnapshot {
        self.advance_from(TutorialStep::DayToggle, TutorialInteraction::DayToggled)
            .await
    }

    /// "Next" on the overlay of whatever step is showing.
    pub async fn continue_overlay(&self) -> TutorialSnapshot {
        self.controller
            .interact(TutorialInteraction::Continue)
            .await
    }
}
