use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyValueStoreError {
    #[error("key-value store io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("key-value store data corrupt: {0}")]
    Corrupt(String),

    #[error("value serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Device-local JSON key-value storage.
///
/// Best effort and eventually durable. Writes to different keys are
/// independent; there is no multi-key transaction.
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, KeyValueStoreError>;

    /// Store a value. Overwrites any previous value for `key`.
    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), KeyValueStoreError>;

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;
}
