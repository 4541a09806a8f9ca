//! Settings store trait definition

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Key-value store for user settings.
///
/// The assistant reads the API key and the stored CV through this seam; the
/// concrete backend (a JSON file for the CLI, memory for tests) is injected.
#[async_trait]
pub trait SettingsStore: Send + Sync + Debug {
    /// Retrieves the requested keys; absent keys are simply missing from the map.
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>, DomainError>;

    /// Stores all entries, overwriting existing values.
    async fn set(&self, entries: HashMap<String, String>) -> Result<(), DomainError>;

    /// Removes the given keys; missing keys are ignored.
    async fn remove(&self, keys: &[&str]) -> Result<(), DomainError>;

    /// Removes every stored entry.
    async fn clear(&self) -> Result<(), DomainError>;

    /// Retrieves a single value.
    async fn get_one(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.get(&[key]).await?.remove(key))
    }
}
