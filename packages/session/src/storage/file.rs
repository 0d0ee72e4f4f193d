//! # Filesystem-backed token storage
//!
//! [`FileStorage`] keeps each key as a small file under a base directory. Native
//! builds place it in the platform data directory:
//!
//! ```text
//! <data_dir>/ecovision/
//! └── token      # raw token string
//! ```

use std::io::ErrorKind;
use std::path::PathBuf;

use super::TokenStorage;
use crate::error::SessionError;

/// Filesystem-backed TokenStorage for native builds.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl TokenStorage for FileStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(content) => Ok(Some(content.trim().to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::Storage(e.to_string())),
        }
    }

    async fn save(&self, key: &str, token: &str) -> Result<(), SessionError> {
        std::fs::create_dir_all(&self.base).map_err(|e| SessionError::Storage(e.to_string()))?;
        std::fs::write(self.path(key), token).map_err(|e| SessionError::Storage(e.to_string()))
    }

    async fn clear(&self, key: &str) -> Result<(), SessionError> {
        match std::fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_storage_roundtrip() {
        let dir = std::env::temp_dir().join(format!("ecovision_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let storage = FileStorage::new(dir.clone());
        assert_eq!(storage.load("token").await.unwrap(), None);

        storage.save("token", "header.payload.signature").await.unwrap();

        // Re-open from same directory
        let reopened = FileStorage::new(dir.clone());
        assert_eq!(
            reopened.load("token").await.unwrap().as_deref(),
            Some("header.payload.signature")
        );

        reopened.clear("token").await.unwrap();
        assert_eq!(storage.load("token").await.unwrap(), None);
        // clearing twice is fine
        reopened.clear("token").await.unwrap();

        let _ = std::fs::remove_dir_all(&dir);
    }
}
