//! # Browser localStorage backend
//!
//! [`LocalStorage`] writes the token into `window.localStorage`, which survives
//! reloads of the page. Every call looks the storage object up again; a page
//! without `window` (workers) or with storage disabled reports
//! [`SessionError::Storage`].

use web_sys::Storage;

use super::TokenStorage;
use crate::error::SessionError;

/// `window.localStorage`-backed TokenStorage for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, SessionError> {
        web_sys::window()
            .ok_or_else(|| SessionError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| SessionError::Storage(format!("{e:?}")))?
            .ok_or_else(|| SessionError::Storage("localStorage unavailable".to_string()))
    }
}

impl TokenStorage for LocalStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }

    async fn save(&self, key: &str, token: &str) -> Result<(), SessionError> {
        self.storage()?
            .set_item(key, token)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }

    async fn clear(&self, key: &str) -> Result<(), SessionError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }
}
