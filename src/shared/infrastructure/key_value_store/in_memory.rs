use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    inner: RwLock<HashMap<String, String>>,
    read_only_keys: HashSet<String>,
    is_offline: bool,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Makes writes to `key` fail while reads keep working.
    pub fn reject_writes_to(&mut self, key: impl Into<String>) {
        self.read_only_keys.insert(key.into());
    }

    pub async fn seed(&self, key: &str, value: &str) {
        self.inner
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        if self.is_offline {
            return Err(KeyValueStoreError::Backend("Key value store offline".into()));
        }
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        if self.is_offline {
            return Err(KeyValueStoreError::Backend("Key value store offline".into()));
        }
        if self.read_only_keys.contains(key) {
            return Err(KeyValueStoreError::Backend(format!(
                "Key {key} is read only"
            )));
        }
        self.inner
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
