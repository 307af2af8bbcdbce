use std::sync::Arc;

use tokio::sync::Mutex;
use dm_core::tutorial::{PersistedTutorialPrefs, TutorialSnapshot, TutorialState};

/// Shared tutorial context containing session state, cached prefs and the
/// dispatch lock.
///
/// ## Lock Ordering
/// When acquiring several locks, acquire `dispatch_lock` first, then `state`,
/// then `prefs`.
pub struct TutorialContext {
    state: Mutex<TutorialState>,
    /// In-memory copy of the persisted prefs; authoritative for the session
    /// even when the last write to storage failed.
    prefs: Mutex<PersistedTutorialPrefs>,
    /// Serializes dispatch so transition + actions + state update are atomic.
    dispatch_lock: Mutex<()>,
}

impl TutorialContext {
    pub fn new(state: TutorialState, prefs: PersistedTutorialPrefs) -> Self {
        Self {
            state: Mutex::new(state),
            prefs: Mutex::new(prefs),
            dispatch_lock: Mutex::new(()),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn get_state(&self) -> TutorialState {
        *self.state.lock().await
    }

    /// Should only be called while holding the dispatch lock.
    pub async fn set_state(&self, state: TutorialState) {
        *self.state.lock().await = state;
    }

    pub async fn get_prefs(&self) -> PersistedTutorialPrefs {
        *self.prefs.lock().await
    }

    /// Should only be called while holding the dispatch lock.
    pub async fn set_prefs(&self, prefs: PersistedTutorialPrefs) {
        *self.prefs.lock().await = prefs;
    }

    pub async fn snapshot(&self) -> TutorialSnapshot {
        let state = self.get_state().await;
        let prefs = self.get_prefs().await;
        TutorialSnapshot::new(state, prefs)
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }
}

impl Default for TutorialContext {
    fn default() -> Self {
        Self::new(TutorialState::Inactive, PersistedTutorialPrefs::default())
    }
}
