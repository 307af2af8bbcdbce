//! Tutorial controller.
//!
//! Owns the tutorial session for the running app: feeds events through the
//! state machine, applies the resulting prefs actions through the prefs
//! port and broadcasts every new snapshot. One instance is created at the
//! composition root and shared by everything that touches the tutorial.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, info_span, warn, Instrument};

use dm_core::ports::TutorialPrefsPort;
use dm_core::tutorial::{
    PersistedTutorialPrefs, TutorialAction, TutorialEvent, TutorialInteraction, TutorialSnapshot,
    TutorialState, TutorialStateMachine, TutorialStep,
};

use super::context::TutorialContext;

pub struct TutorialController {
    context: Arc<TutorialContext>,
    prefs_port: Arc<dyn TutorialPrefsPort>,
    snapshots: watch::Sender<TutorialSnapshot>,
    seeded: AtomicBool,
}

impl TutorialController {
    pub fn new(prefs_port: Arc<dyn TutorialPrefsPort>) -> Self {
        let (snapshots, _) = watch::channel(TutorialSnapshot::default());
        Self {
            context: TutorialContext::default().arc(),
            prefs_port,
            snapshots,
            seeded: AtomicBool::new(false),
        }
    }

    /// Load persisted prefs and seed the session.
    ///
    /// Called once at startup; later calls return the current snapshot.
    pub async fn initialize(&self) -> TutorialSnapshot {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.seed_from_prefs().await;
        self.context.snapshot().await
    }

    /// Receiver that observes every snapshot published after a transition.
    pub fn subscribe(&self) -> watch::Receiver<TutorialSnapshot> {
        self.snapshots.subscribe()
    }

    pub async fn snapshot(&self) -> TutorialSnapshot {
        self.context.snapshot().await
    }

    pub async fn start_tutorial(&self) -> TutorialSnapshot {
        self.dispatch(TutorialEvent::Start).await
    }

    /// Start the tutorial unless the user already finished or skipped it.
    pub async fn auto_start(&self) -> TutorialSnapshot {
        let snapshot = self.initialize().await;
        if snapshot.has_completed_tutorial() || snapshot.state != TutorialState::Inactive {
            debug!(state = ?snapshot.state, "tutorial auto-start skipped");
            return snapshot;
        }
        self.start_tutorial().await
    }

    pub async fn next_step(&self, step: TutorialStep) -> TutorialSnapshot {
        self.dispatch(TutorialEvent::NextStep(step)).await
    }

    pub async fn interact(&self, interaction: TutorialInteraction) -> TutorialSnapshot {
        self.dispatch(TutorialEvent::Interact(interaction)).await
    }

    pub async fn pause_tutorial(&self) -> TutorialSnapshot {
        self.dispatch(TutorialEvent::Pause).await
    }

    pub async fn resume_or_restart(&self) -> TutorialSnapshot {
        self.dispatch(TutorialEvent::ResumeOrRestart).await
    }

    pub async fn skip_tutorial(&self) -> TutorialSnapshot {
        self.dispatch(TutorialEvent::Skip).await
    }

    pub async fn complete_tutorial(&self) -> TutorialSnapshot {
        self.dispatch(TutorialEvent::Complete).await
    }

    /// Back to inactive and forget completion so the tutorial can be replayed.
    pub async fn reset_tutorial(&self) -> TutorialSnapshot {
        self.dispatch(TutorialEvent::Reset).await
    }

    pub async fn dispatch(&self, event: TutorialEvent) -> TutorialSnapshot {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.tutorial_controller.dispatch", event = ?event);
        async {
            self.seed_from_prefs().await;

            let from = self.context.get_state().await;
            let (next, actions) = TutorialStateMachine::transition(from, event);
            if next == from && actions.is_empty() {
                debug!(state = ?from, "tutorial event ignored");
                return self.context.snapshot().await;
            }

            info!(from = ?from, to = ?next, event = ?event, "tutorial state transition");
            self.execute_actions(&actions).await;
            self.context.set_state(next).await;

            let snapshot = self.context.snapshot().await;
            self.snapshots.send_replace(snapshot);
            snapshot
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: &[TutorialAction]) {
        if actions.is_empty() {
            return;
        }

        let mut prefs = self.context.get_prefs().await;
        for action in actions {
            debug!(?action, "tutorial executing action");
            prefs.apply(*action);
        }
        self.context.set_prefs(prefs).await;

        if let Err(err) = self.prefs_port.set_prefs(&prefs).await {
            warn!(error = %err, "failed to persist tutorial prefs, keeping in-memory copy");
        }
    }

    /// Must be called while holding the dispatch lock.
    async fn seed_from_prefs(&self) {
        if self.seeded.swap(true, Ordering::SeqCst) {
            return;
        }

        let prefs = match self.prefs_port.get_prefs().await {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!(error = %err, "failed to load tutorial prefs, starting fresh");
                PersistedTutorialPrefs::default()
            }
        };

        let state = if prefs.has_completed_tutorial {
            TutorialState::Completed
        } else {
            TutorialState::Inactive
        };
        info!(
            state = ?state,
            abandon_count = prefs.abandon_count,
            "tutorial seeded from prefs"
        );

        self.context.set_prefs(prefs).await;
        self.context.set_state(state).await;
        self.snapshots.send_replace(TutorialSnapshot::new(state, prefs));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dm_core::ports::InMemoryTutorialPrefs;

    struct UnreadablePrefsPort;

    #[async_trait::async_trait]
    impl TutorialPrefsPort for UnreadablePrefsPort {
        async fn get_prefs(&self) -> anyhow::Result<PersistedTutorialPrefs> {
            anyhow::bail!("corrupt prefs")
        }

        async fn set_prefs(&self, _prefs: &PersistedTutorialPrefs) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn controller(prefs: PersistedTutorialPrefs) -> (TutorialController, Arc<InMemoryTutorialPrefs>) {
        let port = Arc::new(InMemoryTutorialPrefs::new(prefs));
        (TutorialController::new(port.clone()), port)
    }

    #[tokio::test]
    async fn fresh_install_seeds_inactive() {
        let (controller, _) = controller(PersistedTutorialPrefs::default());

        let snapshot = controller.initialize().await;

        assert_eq!(snapshot.state, TutorialState::Inactive);
        assert!(!snapshot.is_active());
        assert_eq!(snapshot.current_step(), None);
    }

    #[tokio::test]
    async fn completed_prefs_seed_completed_state() {
        let (controller, _) = controller(PersistedTutorialPrefs {
            has_completed_tutorial: true,
            abandon_count: 1,
        });

        let snapshot = controller.auto_start().await;

        assert_eq!(snapshot.state, TutorialState::Completed);
        assert_eq!(snapshot.abandon_count(), 1);
    }

    #[tokio::test]
    async fn start_enters_welcome() {
        let (controller, _) = controller(PersistedTutorialPrefs::default());

        let snapshot = controller.start_tutorial().await;

        assert!(snapshot.is_active());
        assert_eq!(snapshot.current_step(), Some(TutorialStep::Welcome));
    }

    #[tokio::test]
    async fn skip_sets_terminal_flags_and_persists() {
        let (controller, port) = controller(PersistedTutorialPrefs::default());
        controller.start_tutorial().await;
        controller.pause_tutorial().await;

        let snapshot = controller.skip_tutorial().await;

        assert!(!snapshot.is_active());
        assert_eq!(snapshot.current_step(), None);
        assert!(snapshot.has_completed_tutorial());
        assert_eq!(port.stored().abandon_count, 1);
        assert!(port.stored().has_completed_tutorial);
    }

    #[tokio::test]
    async fn reset_after_completion_allows_restart() {
        let (controller, port) = controller(PersistedTutorialPrefs {
            has_completed_tutorial: true,
            abandon_count: 0,
        });
        assert_eq!(
            controller.start_tutorial().await.state,
            TutorialState::Completed
        );

        controller.reset_tutorial().await;
        assert!(!port.stored().has_completed_tutorial);

        let snapshot = controller.start_tutorial().await;
        assert_eq!(snapshot.state, TutorialState::Active(TutorialStep::Welcome));
    }

    #[tokio::test]
    async fn write_failure_keeps_in_memory_prefs() {
        let port = Arc::new(InMemoryTutorialPrefs::failing_writes());
        let controller = TutorialController::new(port);
        controller.start_tutorial().await;

        let snapshot = controller.skip_tutorial().await;

        assert_eq!(snapshot.state, TutorialState::Completed);
        assert!(snapshot.has_completed_tutorial());
    }

    #[tokio::test]
    async fn read_failure_falls_back_to_fresh_session() {
        let controller = TutorialController::new(Arc::new(UnreadablePrefsPort));

        let snapshot = controller.auto_start().await;

        assert_eq!(snapshot.state, TutorialState::Active(TutorialStep::Welcome));
    }

    #[tokio::test]
    async fn subscribers_see_transitions() {
        let (controller, _) = controller(PersistedTutorialPrefs::default());
        let mut rx = controller.subscribe();

        controller.start_tutorial().await;

        assert!(rx.has_changed().unwrap());
        assert_eq!(
            rx.borrow_and_update().current_step(),
            Some(TutorialStep::Welcome)
        );
    }

    #[tokio::test]
    async fn illegal_next_step_is_ignored() {
        let (controller, _) = controller(PersistedTutorialPrefs::default());
        controller.start_tutorial().await;

        let snapshot = controller.next_step(TutorialStep::Completion).await;

        assert_eq!(snapshot.current_step(), Some(TutorialStep::Welcome));
    }

    #[tokio::test]
    async fn completing_from_final_step_does_not_count_abandon() {
        let (controller, port) = controller(PersistedTutorialPrefs::default());
        controller.start_tutorial().await;
        for step in [
            TutorialStep::AddTaskButton,
            TutorialStep::TitleInput,
            TutorialStep::CategorySelector,
            TutorialStep::PrioritySelector,
            TutorialStep::Cleanup,
            TutorialStep::Completion,
        ] {
            assert_eq!(controller.next_step(step).await.current_step(), Some(step));
        }

        let snapshot = controller.complete_tutorial().await;

        assert_eq!(snapshot.state, TutorialState::Completed);
        assert_eq!(port.stored().abandon_count, 0);
        assert!(port.stored().has_completed_tutorial);
    }
}
