//! # Session core for EcoVision
//!
//! Everything that decides "who is logged in" lives here, free of any UI
//! dependency so it can be tested natively.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | [`SessionConfig`]: storage key, token lifetime, admin email, API base URL |
//! | [`models`] | [`User`], [`Role`] and the profile update body |
//! | [`token`] | Bearer token codec: payload decoding, expiry, mock encoding |
//! | [`storage`] | [`TokenStorage`] trait plus memory, file and browser backends |
//! | [`endpoints`] | [`AuthEndpoints`]: the external authentication collaborator |
//! | [`store`] | [`SessionStore`], the session state machine |
//! | [`guard`] | Route access decisions derived from a [`SessionSnapshot`] |
//! | [`issuer`] | Local mock token issuance used by the login and signup forms |

pub mod config;
pub mod endpoints;
pub mod error;
pub mod guard;
pub mod issuer;
pub mod models;
pub mod notice;
pub mod storage;
pub mod store;
pub mod token;

pub use config::SessionConfig;
pub use endpoints::{AuthEndpoints, EndpointError};
pub use error::SessionError;
pub use guard::{decide, sanitize_return_path, Access, GuardOutcome, DEFAULT_RETURN_PATH};
pub use issuer::{CredentialError, SignupForm};
pub use models::{AccountType, ProfileUpdate, Role, User};
pub use notice::{Notice, NoticeLevel};
pub use storage::{FileStorage, MemoryStorage, TokenStorage};
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use storage::LocalStorage;
pub use store::{SessionSnapshot, SessionState, SessionStore};
pub use token::Claims;
