//! File-backed settings store
//!
//! Persists settings as a flat JSON object, the CLI's analog of the browser
//! extension's local storage area.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::DomainError;
use crate::domain::settings::SettingsStore;

/// Settings store persisted as a JSON file.
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    // Serializes read-modify-write cycles against the same file.
    lock: Mutex<()>,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Default location under the platform config directory.
    pub fn default_path() -> Result<PathBuf, DomainError> {
        let base = dirs::config_dir()
            .ok_or_else(|| DomainError::storage("Could not determine the config directory"))?;
        Ok(base.join("applymate").join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<HashMap<String, String>, DomainError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                DomainError::storage(format!(
                    "Settings file {} is not valid JSON: {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn save(&self, entries: &HashMap<String, String>) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| DomainError::storage(format!("Failed to serialize settings: {}", e)))?;

        tokio::fs::write(&self.path, json).await.map_err(|e| {
            DomainError::storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>, DomainError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        Ok(keys
            .iter()
            .filter_map(|key| entries.remove(*key).map(|v| (key.to_string(), v)))
            .collect())
    }

    async fn set(&self, new_entries: HashMap<String, String>) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        entries.extend(new_entries);
        self.save(&entries).await
    }

    async fn remove(&self, keys: &[&str]) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        for key in keys {
            entries.remove(*key);
        }
        self.save(&entries).await
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        self.save(&HashMap::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::{API_KEY, USER_CV};

    #[tokio::test]
    async fn test_round_trip_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = FileSettingsStore::new(&path);
        store
            .set(HashMap::from([(API_KEY.to_string(), "key-123".to_string())]))
            .await
            .unwrap();

        // A fresh store against the same file sees the persisted value.
        let reopened = FileSettingsStore::new(&path);
        assert_eq!(
            reopened.get_one(API_KEY).await.unwrap().as_deref(),
            Some("key-123")
        );
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("absent.json"));
        assert!(store.get(&[API_KEY]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("settings.json"));

        store
            .set(HashMap::from([
                (API_KEY.to_string(), "key".to_string()),
                (USER_CV.to_string(), "cv".to_string()),
            ]))
            .await
            .unwrap();
        store.remove(&[API_KEY]).await.unwrap();

        let values = store.get(&[API_KEY, USER_CV]).await.unwrap();
        assert!(!values.contains_key(API_KEY));
        assert_eq!(values[USER_CV], "cv");
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, b"not json").unwrap();

        let store = FileSettingsStore::new(&path);
        assert!(matches!(
            store.get(&[API_KEY]).await.unwrap_err(),
            DomainError::Storage { .. }
        ));
    }
}
