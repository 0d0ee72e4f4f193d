//! # Token persistence
//!
//! The session keeps exactly one persisted value: the raw token string under a
//! fixed key. [`TokenStorage`] abstracts where that value lives:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`MemoryStorage`] | tests, and a fallback when nothing else is available |
//! | [`FileStorage`] | native builds, one file per key under a data directory |
//! | `LocalStorage` | browser builds (`wasm32` + `web` feature), `window.localStorage` |
//!
//! The store is the only writer, so backends need no coordination beyond "last
//! write wins".

use std::future::Future;

use crate::error::SessionError;

mod file;
mod memory;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;

pub use file::FileStorage;
pub use memory::MemoryStorage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

/// Async key-value cell for the persisted token.
pub trait TokenStorage {
    fn load(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, SessionError>>;
    fn save(
        &self,
        key: &str,
        token: &str,
    ) -> impl Future<Output = Result<(), SessionError>>;
    fn clear(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<(), SessionError>>;
}
