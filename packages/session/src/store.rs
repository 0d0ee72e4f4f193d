//! # SessionStore — the session state machine
//!
//! [`SessionStore`] is the single source of truth for "who is logged in". It is
//! built explicitly from a [`TokenStorage`], an [`AuthEndpoints`] collaborator
//! and a [`SessionConfig`], and handed to consumers (the UI context, tests)
//! instead of living in ambient global state.
//!
//! ## States
//!
//! ```text
//! Uninitialized ──initialize──▶ Loading ──┬─▶ Anonymous ◀──logout / expiry──┐
//!                                          └─▶ Authenticated ◀──login────────┘
//! ```
//!
//! The identity is present iff a structurally valid, unexpired token is held.
//! Every operation recovers locally from malformed tokens, expired tokens and
//! collaborator failures: state falls back to (or stays) anonymous, a
//! [`Notice`] is queued for the UI, and the caller receives a [`SessionError`].
//!
//! ## Sharing
//!
//! The store is a cheap `Clone` handle over shared state. The lock is only held
//! for synchronous updates, never across an `.await`, so a clone can sit in a
//! UI context while async operations run on another clone.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::endpoints::AuthEndpoints;
use crate::error::SessionError;
use crate::models::{ProfileUpdate, Role, User};
use crate::notice::{Notice, NoticeLevel};
use crate::storage::TokenStorage;
use crate::token;

const SESSION_EXPIRED: &str = "Session expired. Please login again.";
const INVALID_TOKEN: &str = "Invalid authentication token";
const GOOGLE_FAILED: &str = "Google login failed. Please try again.";
const LOGGED_OUT: &str = "Logged out successfully";
const RESET_SENT: &str = "Password reset email sent successfully!";
const RESET_FAILED: &str = "Failed to send password reset email";
const PROFILE_UPDATED: &str = "Profile updated successfully!";
const PROFILE_FAILED: &str = "Failed to update profile";
const ACCOUNT_CREATED: &str = "Account created successfully! Welcome to EcoVision!";
const SAVE_FAILED: &str = "Could not save your session. Please try again.";

/// Lifecycle state of a [`SessionStore`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Loading,
    Anonymous,
    Authenticated,
}

/// Read-only view of the session at one point in time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub user: Option<User>,
    pub role: Option<Role>,
    /// A collaborator call started by the store is in flight.
    pub pending: bool,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    /// True until `initialize` has resolved.
    pub fn is_loading(&self) -> bool {
        matches!(
            self.state,
            SessionState::Uninitialized | SessionState::Loading
        )
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: SessionState,
    token: Option<String>,
    user: Option<User>,
    role: Option<Role>,
    pending: bool,
    notices: Vec<Notice>,
}

impl Inner {
    fn adopt(&mut self, token: String, user: User) {
        self.role = Some(user.effective_role());
        self.user = Some(user);
        self.token = Some(token);
    }

    fn forget(&mut self) {
        self.token = None;
        self.user = None;
        self.role = None;
    }
}

/// Token-derived session, shared between clones.
#[derive(Clone)]
pub struct SessionStore<S: TokenStorage, E: AuthEndpoints> {
    storage: S,
    endpoints: E,
    config: Arc<SessionConfig>,
    inner: Arc<Mutex<Inner>>,
}

impl<S: TokenStorage, E: AuthEndpoints> SessionStore<S, E> {
    pub fn new(storage: S, endpoints: E, config: SessionConfig) -> Self {
        Self {
            storage,
            endpoints,
            config: Arc::new(config),
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn with_inner<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> R {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut inner)
    }

    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => info!(message = %notice.message, "session notice"),
            NoticeLevel::Error => warn!(message = %notice.message, "session notice"),
        }
        self.with_inner(|inner| inner.notices.push(notice));
    }

    fn set_pending(&self, pending: bool) {
        self.with_inner(|inner| inner.pending = pending);
    }

    /// Remove the persisted token, logging rather than failing.
    async fn discard_persisted(&self) {
        if let Err(e) = self.storage.clear(&self.config.storage_key).await {
            warn!(error = %e, "failed to remove persisted token");
        }
    }

    /// Drop the held token because it has expired.
    async fn expire(&self) {
        self.discard_persisted().await;
        self.with_inner(|inner| {
            inner.forget();
            inner.state = SessionState::Anonymous;
        });
        self.notify(Notice::error(SESSION_EXPIRED));
    }

    /// Rehydrate the session from the persisted token.
    ///
    /// Always resolves: missing, malformed and expired tokens all end in
    /// [`SessionState::Anonymous`]. The store reports loading until this
    /// returns, including the awaited last-login bookkeeping.
    pub async fn initialize(&self) {
        self.with_inner(|inner| {
            inner.forget();
            inner.state = SessionState::Loading;
        });

        let persisted = match self.storage.load(&self.config.storage_key).await {
            Ok(persisted) => persisted,
            Err(e) => {
                warn!(error = %e, "failed to read persisted token");
                None
            }
        };

        let Some(raw) = persisted else {
            debug!("no persisted session");
            self.with_inner(|inner| inner.state = SessionState::Anonymous);
            return;
        };

        match token::decode(&raw) {
            Ok(claims) if !claims.is_expired() => {
                let user_id = claims.user.id.clone();
                self.with_inner(|inner| inner.adopt(raw, claims.user));

                if let Err(e) = self.endpoints.record_login(&user_id).await {
                    warn!(user_id = %user_id, error = %e, "failed to update last login");
                }

                // a logout racing the bookkeeping call wins
                self.with_inner(|inner| {
                    inner.state = if inner.user.is_some() {
                        SessionState::Authenticated
                    } else {
                        SessionState::Anonymous
                    };
                });
                info!(user_id = %user_id, "session restored");
            }
            Ok(claims) => {
                debug!(exp = claims.exp, "persisted token expired");
                self.expire().await;
            }
            Err(e) => {
                self.discard_persisted().await;
                self.with_inner(|inner| inner.state = SessionState::Anonymous);
                tracing::error!(error = %e, "token validation error");
            }
        }
    }

    /// Adopt `token` as the active session.
    ///
    /// A malformed token leaves the session untouched. An expired one ends any
    /// current session.
    pub async fn login(&self, token: &str) -> Result<User, SessionError> {
        let claims = match token::decode(token) {
            Ok(claims) => claims,
            Err(e) => {
                self.notify(Notice::error(INVALID_TOKEN));
                return Err(e);
            }
        };

        if claims.is_expired() {
            self.expire().await;
            return Err(SessionError::ExpiredToken {
                expired_at: claims.exp,
            });
        }

        if let Err(e) = self.storage.save(&self.config.storage_key, token).await {
            self.notify(Notice::error(SAVE_FAILED));
            return Err(e);
        }

        let user = claims.user;
        self.with_inner(|inner| {
            inner.adopt(token.to_string(), user.clone());
            inner.state = SessionState::Authenticated;
        });
        self.notify(Notice::success(format!(
            "Welcome back, {}!",
            user.display_name()
        )));
        Ok(user)
    }

    /// Log in with the token minted for a freshly created account.
    pub async fn signup(&self, token: &str) -> Result<User, SessionError> {
        let user = self.login(token).await?;
        info!(user_id = %user.id, "account created");
        self.notify(Notice::success(ACCOUNT_CREATED));
        Ok(user)
    }

    /// Exchange an external Google credential for a session token and log in
    /// with it. `pending` is set for the duration of the call.
    pub async fn login_with_google(&self, credential: &str) -> Result<User, SessionError> {
        self.set_pending(true);

        let outcome = match self.endpoints.google(credential).await {
            Ok(token) => self.login(&token).await,
            Err(e) => Err(SessionError::from(e)),
        };

        if let Err(e) = &outcome {
            warn!(error = %e, "google authentication failed");
            self.notify(Notice::error(GOOGLE_FAILED));
        }

        self.set_pending(false);
        outcome
    }

    /// End the session. The in-memory identity is always dropped; a storage
    /// failure is still reported to the caller.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let cleared = self.storage.clear(&self.config.storage_key).await;
        self.with_inner(|inner| {
            inner.forget();
            inner.state = SessionState::Anonymous;
        });
        self.notify(Notice::success(LOGGED_OUT));

        if let Err(e) = &cleared {
            warn!(error = %e, "persisted token survived logout");
        }
        cleared
    }

    pub async fn reset_password(&self, email: &str) -> Result<(), SessionError> {
        match self.endpoints.reset_password(email).await {
            Ok(()) => {
                self.notify(Notice::success(RESET_SENT));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "password reset failed");
                self.notify(Notice::error(RESET_FAILED));
                Err(e.into())
            }
        }
    }

    /// Send a partial profile update and replace the active identity with the
    /// collaborator's answer.
    ///
    /// The held token is not reissued, so a later reload restores the identity
    /// embedded in the token.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, SessionError> {
        let Some(bearer) = self.token() else {
            self.notify(Notice::error(PROFILE_FAILED));
            return Err(SessionError::NotAuthenticated);
        };

        match self.endpoints.update_profile(&bearer, update).await {
            Ok(user) => {
                self.with_inner(|inner| {
                    // only if the session was not ended meanwhile
                    if inner.token.as_deref() == Some(bearer.as_str()) {
                        inner.role = Some(user.effective_role());
                        inner.user = Some(user.clone());
                    }
                });
                self.notify(Notice::success(PROFILE_UPDATED));
                Ok(user)
            }
            Err(e) => {
                warn!(error = %e, "profile update failed");
                self.notify(Notice::error(PROFILE_FAILED));
                Err(e.into())
            }
        }
    }

    /// Re-check the held token and end the session if it has expired since it
    /// was adopted.
    pub async fn refresh(&self) -> SessionState {
        self.refresh_at(token::now_millis()).await
    }

    /// [`SessionStore::refresh`] against an explicit clock, in epoch
    /// milliseconds.
    pub async fn refresh_at(&self, now_millis: i64) -> SessionState {
        let held = self.token();
        if let Some(raw) = held {
            match token::decode(&raw) {
                Ok(claims) if !claims.is_expired_at(now_millis) => {}
                Ok(_) => self.expire().await,
                Err(e) => {
                    tracing::error!(error = %e, "held token no longer decodes");
                    self.discard_persisted().await;
                    self.with_inner(|inner| {
                        inner.forget();
                        inner.state = SessionState::Anonymous;
                    });
                }
            }
        }
        self.state()
    }

    /// Drop in-memory state without touching persisted storage.
    pub fn teardown(&self) {
        self.with_inner(|inner| *inner = Inner::default());
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.with_inner(|inner| SessionSnapshot {
            state: inner.state,
            user: inner.user.clone(),
            role: inner.role,
            pending: inner.pending,
        })
    }

    pub fn state(&self) -> SessionState {
        self.with_inner(|inner| inner.state)
    }

    pub fn user(&self) -> Option<User> {
        self.with_inner(|inner| inner.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.with_inner(|inner| inner.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.with_inner(|inner| inner.user.is_some())
    }

    pub fn is_admin(&self) -> bool {
        self.with_inner(|inner| inner.role == Some(Role::Admin))
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot().is_loading()
    }

    pub fn is_pending(&self) -> bool {
        self.with_inner(|inner| inner.pending)
    }

    /// Drain queued notices, oldest first.
    pub fn take_notices(&self) -> Vec<Notice> {
        self.with_inner(|inner| std::mem::take(&mut inner.notices))
    }
}
