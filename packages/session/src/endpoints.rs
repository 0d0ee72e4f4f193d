//! # Authentication collaborator
//!
//! [`AuthEndpoints`] is the boundary to the external authentication API. The
//! session store only depends on this trait; the HTTP implementation lives in
//! the `api` crate and tests use an in-process fake.
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`google`](AuthEndpoints::google) | `POST /api/auth/google {token}` → `{token}` |
//! | [`reset_password`](AuthEndpoints::reset_password) | `POST /api/auth/reset-password {email}` |
//! | [`update_profile`](AuthEndpoints::update_profile) | `PUT /api/auth/profile` (bearer) → user |
//! | [`record_login`](AuthEndpoints::record_login) | none yet, defaults to a no-op |

use std::future::Future;

use thiserror::Error;

use crate::models::{ProfileUpdate, User};

/// Failure talking to a collaborator endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("endpoint returned status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Async interface to the authentication API.
pub trait AuthEndpoints {
    /// Exchange an externally obtained Google credential for a session token.
    fn google(
        &self,
        credential: &str,
    ) -> impl Future<Output = Result<String, EndpointError>>;

    /// Ask the API to send a password reset email.
    fn reset_password(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<(), EndpointError>>;

    /// Apply a partial profile update on behalf of the bearer token holder.
    fn update_profile(
        &self,
        bearer: &str,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<User, EndpointError>>;

    /// Record that `user_id` resumed a session.
    fn record_login(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<(), EndpointError>> {
        let _ = user_id;
        async { Ok(()) }
    }
}
