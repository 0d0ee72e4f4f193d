//! # Session configuration
//!
//! [`SessionConfig`] collects the handful of constants the session core needs.
//! It can be embedded in a TOML file; every field has a serde default, so an
//! empty document is equivalent to [`SessionConfig::default`]. Native builds
//! read overrides from `<data_dir>/ecovision/session.toml` when it exists.
//!
//! ```toml
//! storage_key = "token"
//! token_lifetime_secs = 86400
//! admin_email = "admin@ecovision.com"
//! api_base_url = ""
//! ```

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// File name of the optional on-disk configuration.
pub const CONFIG_FILE: &str = "session.toml";

/// Configuration for [`crate::SessionStore`] and the mock issuer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key under which the raw token string is persisted.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Validity window of issued tokens, in seconds.
    #[serde(default = "default_token_lifetime")]
    pub token_lifetime_secs: i64,
    /// Email address the mock issuer treats as the administrator account.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    /// Prefix for collaborator endpoints. Empty means same origin.
    #[serde(default)]
    pub api_base_url: String,
}

fn default_storage_key() -> String {
    "token".to_string()
}

fn default_token_lifetime() -> i64 {
    24 * 60 * 60
}

fn default_admin_email() -> String {
    "admin@ecovision.com".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            token_lifetime_secs: default_token_lifetime(),
            admin_email: default_admin_email(),
            api_base_url: String::new(),
        }
    }
}

impl SessionConfig {
    /// Builder method to point collaborator calls at another origin.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder method to change the token lifetime.
    pub fn with_token_lifetime(mut self, secs: i64) -> Self {
        self.token_lifetime_secs = secs;
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read a TOML file. A missing file is `Ok(None)`.
    pub fn from_file(path: &Path) -> Result<Option<Self>, SessionError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionError::Storage(e.to_string())),
        };
        Self::from_toml(&text)
            .map(Some)
            .map_err(|e| SessionError::Storage(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = SessionConfig::from_toml("").unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.storage_key, "token");
        assert_eq!(config.token_lifetime_secs, 86_400);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = SessionConfig::from_toml("api_base_url = \"https://api.example.com\"").unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.admin_email, "admin@ecovision.com");
    }

    #[test]
    fn test_from_file() {
        let dir = std::env::temp_dir().join(format!("ecovision_config_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);

        assert_eq!(SessionConfig::from_file(&path).unwrap(), None);

        std::fs::write(&path, "token_lifetime_secs = 3600\n").unwrap();
        let config = SessionConfig::from_file(&path).unwrap().unwrap();
        assert_eq!(config.token_lifetime_secs, 3_600);
        assert_eq!(config.storage_key, "token");

        std::fs::write(&path, "token_lifetime_secs = \"soon\"\n").unwrap();
        assert!(matches!(
            SessionConfig::from_file(&path),
            Err(SessionError::Storage(_))
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
