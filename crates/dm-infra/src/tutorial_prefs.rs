//! Tutorial prefs repository backed by the key-value store

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;

use dm_core::ports::{KeyValueStorePort, TutorialPrefsPort};
use dm_core::tutorial::PersistedTutorialPrefs;

pub const TUTORIAL_PREFS_KEY: &str = "domani.tutorial";

pub struct KvTutorialPrefsRepository {
    store: Arc<dyn KeyValueStorePort>,
    key: String,
}

impl KvTutorialPrefsRepository {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self::with_key(store, TUTORIAL_PREFS_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStorePort>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

#[async_trait]
impl TutorialPrefsPort for KvTutorialPrefsRepository {
    async fn get_prefs(&self) -> anyhow::Result<PersistedTutorialPrefs> {
        let Some(value) = self
            .store
            .get(&self.key)
            .await
            .with_context(|| format!("read tutorial prefs failed: {}", self.key))?
        else {
            return Ok(PersistedTutorialPrefs::default());
        };

        serde_json::from_value(value)
            .map_err(|e| anyhow::anyhow!("Failed to parse tutorial prefs: {}", e))
    }

    async fn set_prefs(&self, prefs: &PersistedTutorialPrefs) -> anyhow::Result<()> {
        let value = serde_json::to_value(prefs)
            .map_err(|e| anyhow::anyhow!("Failed to serialize tutorial prefs: {}", e))?;
        self.store
            .set(&self.key, value)
            .await
            .with_context(|| format!("write tutorial prefs failed: {}", self.key))
    }
}
