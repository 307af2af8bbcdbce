//! Tutorial prefs port
//!
//! Contract for persisting the tutorial flags that survive restarts.

use async_trait::async_trait;

use crate::tutorial::PersistedTutorialPrefs;

#[async_trait]
pub trait TutorialPrefsPort: Send + Sync {
    /// Load prefs; a store that has never been written yields defaults.
    async fn get_prefs(&self) -> anyhow::Result<PersistedTutorialPrefs>;

    async fn set_prefs(&self, prefs: &PersistedTutorialPrefs) -> anyhow::Result<()>;

    async fn is_completed(&self) -> anyhow::Result<bool> {
        Ok(self.get_prefs().await?.has_completed_tutorial)
    }
}

/// Prefs held in memory, for tests in this and downstream crates.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct InMemoryTutorialPrefs {
    prefs: std::sync::Mutex<PersistedTutorialPrefs>,
    fail_writes: bool,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryTutorialPrefs {
    pub fn new(prefs: PersistedTutorialPrefs) -> Self {
        Self {
            prefs: std::sync::Mutex::new(prefs),
            fail_writes: false,
        }
    }

    /// Every `set_prefs` call fails and leaves the stored value untouched.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> PersistedTutorialPrefs {
        *self.prefs.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(any(test, feature = "test-support"))]
#[async_trait]
impl TutorialPrefsPort for InMemoryTutorialPrefs {
    async fn get_prefs(&self) -> anyhow::Result<PersistedTutorialPrefs> {
        Ok(self.stored())
    }

    async fn set_prefs(&self, prefs: &PersistedTutorialPrefs) -> anyhow::Result<()> {
        if self.fail_writes {
            anyhow::bail!("storage full");
        }
        *self.prefs.lock().unwrap_or_else(|e| e.into_inner()) = *prefs;
        Ok(())
    }
}

#[cfg(test)]
mockall::mock! {
    pub TutorialPrefs {}

    #[async_trait]
    impl TutorialPrefsPort for TutorialPrefs {
        async fn get_prefs(&self) -> anyhow::Result<PersistedTutorialPrefs>;
        async fn set_prefs(&self, prefs: &PersistedTutorialPrefs) -> anyhow::Result<()>;
    }
}
