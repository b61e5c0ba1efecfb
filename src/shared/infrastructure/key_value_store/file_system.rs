// File backed implementation of the KeyValueStore port.
//
// Each key maps to `<root>/<key>.json`. Writes go to a sibling temp file first and are
// renamed into place, so a crash mid-write leaves the previous value readable.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileSystemKeyValueStore {
    root: PathBuf,
}

impl FileSystemKeyValueStore {
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, KeyValueStoreError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| KeyValueStoreError::Backend(format!("{}: {e}", root.display())))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, KeyValueStoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(KeyValueStoreError::Backend(format!("invalid key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileSystemKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KeyValueStoreError::Backend(format!(
                "{}: {e}",
                path.display()
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value)
            .await
            .map_err(|e| KeyValueStoreError::Backend(format!("{}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| KeyValueStoreError::Backend(format!("{}: {e}", path.display())))?;
        Ok(())
    }
}
