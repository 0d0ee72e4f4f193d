//! Shared session constructor for all platforms.
//!
//! Returns a [`session::SessionStore`] backed by the appropriate storage:
//! - **Web** (WASM + `web` feature): `window.localStorage`
//! - **Native**: a file under `<data_dir>/ecovision/`, next to an optional
//!   `session.toml` that replaces the built-in configuration
//! - **WASM without `web`**: memory only

use std::time::Duration;

use api::HttpAuthEndpoints;
use session::{SessionConfig, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = session::LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = session::FileStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStorage = session::MemoryStorage;

/// The session store type the UI runs with.
pub type AppSession = SessionStore<PlatformStorage, HttpAuthEndpoints>;

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("ecovision")
}

fn make_storage() -> PlatformStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        session::LocalStorage::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        session::FileStorage::new(data_dir())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        session::MemoryStorage::new()
    }
}

fn load_overrides(config: SessionConfig) -> SessionConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = data_dir().join(session::config::CONFIG_FILE);
        match SessionConfig::from_file(&path) {
            Ok(Some(loaded)) => {
                tracing::info!(path = %path.display(), "loaded session config");
                return loaded;
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "ignoring session config file"),
        }
    }
    config
}

/// Browser requests need an absolute URL, so "same origin" is resolved to the
/// page's origin there.
fn resolve_api_base(config: SessionConfig) -> SessionConfig {
    #[cfg(target_arch = "wasm32")]
    {
        if config.api_base_url.is_empty() {
            if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
                return config.with_api_base_url(origin);
            }
        }
        config
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        api::ApiConfig::from_env().apply(config)
    }
}

/// Build the platform session store from `config`.
pub fn make_session(config: SessionConfig) -> AppSession {
    let config = resolve_api_base(load_overrides(config));
    tracing::debug!(api = %config.api_base_url, "creating session store");
    let endpoints = HttpAuthEndpoints::from_config(&config);
    SessionStore::new(make_storage(), endpoints, config)
}

/// Platform-aware async sleep.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
