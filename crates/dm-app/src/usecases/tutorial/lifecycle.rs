//! Tutorial lifecycle controller.
//!
//! Keeps the tutorial paused while the user cannot see it: when the app
//! goes to the background or the user navigates to a screen the tutorial
//! does not cover. Resumes it when they come back.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use dm_core::tutorial::{is_tutorial_route, TutorialSnapshot, TutorialState};

use super::controller::TutorialController;

/// Platform application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppState {
    #[default]
    Active,
    Background,
    Inactive,
}

impl AppState {
    pub fn is_foreground(self) -> bool {
        self == AppState::Active
    }
}

/// Events delivered by the platform adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PlatformEvent {
    AppState(AppState),
    Navigated(String),
}

struct Observed {
    app_state: AppState,
    route: Option<String>,
}

pub struct TutorialLifecycleController {
    tutorial: Arc<TutorialController>,
    observed: Mutex<Observed>,
}

impl TutorialLifecycleController {
    pub fn new(tutorial: Arc<TutorialController>) -> Self {
        Self {
            tutorial,
            observed: Mutex::new(Observed {
                app_state: AppState::Active,
                route: None,
            }),
        }
    }

    pub async fn handle(&self, event: PlatformEvent) -> TutorialSnapshot {
        match event {
            PlatformEvent::AppState(state) => self.on_app_state_change(state).await,
            PlatformEvent::Navigated(path) => self.on_route_change(&path).await,
        }
    }

    pub async fn on_app_state_change(&self, next: AppState) -> TutorialSnapshot {
        let (previous, on_tutorial_route) = {
            let mut observed = self.observed.lock().await;
            let previous = std::mem::replace(&mut observed.app_state, next);
            let on_route = observed.route.as_deref().is_some_and(is_tutorial_route);
            (previous, on_route)
        };

        let snapshot = self.tutorial.snapshot().await;
        if previous.is_foreground() && !next.is_foreground() && snapshot.is_active() {
            info!(from = ?previous, to = ?next, "app left foreground, pausing tutorial");
            return self.tutorial.pause_tutorial().await;
        }
        // Resumes a paused step, or restarts at welcome when nothing was paused.
        // A completed tutorial stays completed.
        if !previous.is_foreground() && next.is_foreground() && on_tutorial_route {
            info!(from = ?previous, to = ?next, "app returned to foreground, resuming tutorial");
            return self.tutorial.resume_or_restart().await;
        }

        debug!(from = ?previous, to = ?next, "app state change left tutorial untouched");
        snapshot
    }

    pub async fn on_route_change(&self, path: &str) -> TutorialSnapshot {
        let previous = {
            let mut observed = self.observed.lock().await;
            observed.route.replace(path.to_string())
        };
        let was_eligible = previous.as_deref().is_some_and(is_tutorial_route);
        let is_eligible = is_tutorial_route(path);

        let snapshot = self.tutorial.snapshot().await;
        if was_eligible && !is_eligible && snapshot.is_active() {
            info!(from = ?previous, to = path, "navigated away from tutorial, pausing");
            return self.tutorial.pause_tutorial().await;
        }
        if !was_eligible
            && is_eligible
            && snapshot.paused_step().is_some()
            && snapshot.state != TutorialState::Completed
        {
            info!(from = ?previous, to = path, "navigated back to tutorial, resuming");
            return self.tutorial.resume_or_restart().await;
        }

        snapshot
    }

    /// Drive the rules from a platform event stream until it closes.
    pub fn spawn(self: Arc<Self>, mut events: mpsc::Receiver<PlatformEvent>) -> JoinHandle<()> {
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                self.handle(event).await;
            }
            debug!("platform event stream closed");
        })
    }
}
