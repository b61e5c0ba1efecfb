use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyValueStoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("serialization failed for key {key}: {reason}")]
    Serialization { key: String, reason: String },

    #[error("refusing to overwrite unreadable value at {key}: {reason}")]
    Unreadable { key: String, reason: String },
}

/// String keyed persistence for small JSON blobs.
///
/// A missing key reads as `None`. `set` replaces the whole value.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;
}

pub mod file_system;
pub mod in_memory;
