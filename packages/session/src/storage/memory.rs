use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::TokenStorage;
use crate::error::SessionError;

/// In-memory TokenStorage for testing and as a last-resort fallback.
///
/// Clones share the same cells, so a clone kept by a test observes what the
/// store persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synchronous read for inspection.
    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Synchronous write, used to seed a token before `initialize`.
    pub fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}

impl TokenStorage for MemoryStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.get(key))
    }

    async fn save(&self, key: &str, token: &str) -> Result<(), SessionError> {
        self.set(key, token);
        Ok(())
    }

    async fn clear(&self, key: &str) -> Result<(), SessionError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}
