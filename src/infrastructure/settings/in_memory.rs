//! In-memory settings store

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::settings::SettingsStore;

/// Thread-safe in-memory settings store.
///
/// Useful for testing and embedding. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with entries
    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>, DomainError> {
        let entries = self.entries.read().unwrap();
        Ok(keys
            .iter()
            .filter_map(|key| entries.get(*key).map(|v| (key.to_string(), v.clone())))
            .collect())
    }

    async fn set(&self, new_entries: HashMap<String, String>) -> Result<(), DomainError> {
        self.entries.write().unwrap().extend(new_entries);
        Ok(())
    }

    async fn remove(&self, keys: &[&str]) -> Result<(), DomainError> {
        let mut entries = self.entries.write().unwrap();
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.entries.write().unwrap().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::{API_KEY, USER_CV};

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemorySettingsStore::new();
        store
            .set(HashMap::from([
                (API_KEY.to_string(), "key-123".to_string()),
                (USER_CV.to_string(), "my cv".to_string()),
            ]))
            .await
            .unwrap();

        let values = store.get(&[API_KEY, USER_CV, "unknown"]).await.unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[API_KEY], "key-123");
        assert_eq!(store.get_one(USER_CV).await.unwrap().as_deref(), Some("my cv"));
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let store = InMemorySettingsStore::with_entries(HashMap::from([
            (API_KEY.to_string(), "key".to_string()),
            (USER_CV.to_string(), "cv".to_string()),
        ]));

        store.remove(&[API_KEY, "missing"]).await.unwrap();
        assert_eq!(store.get_one(API_KEY).await.unwrap(), None);
        assert!(store.get_one(USER_CV).await.unwrap().is_some());

        store.clear().await.unwrap();
        assert!(store.get(&[USER_CV]).await.unwrap().is_empty());
    }
}
