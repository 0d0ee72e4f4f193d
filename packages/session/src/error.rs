use thiserror::Error;

use crate::endpoints::EndpointError;

/// Failures reported by [`crate::SessionStore`] operations.
///
/// None of these are fatal: the store has already fallen back to a consistent
/// state (anonymous or unchanged) by the time the caller sees one.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid authentication token: {0}")]
    InvalidToken(String),
    #[error("authentication token expired at {expired_at}")]
    ExpiredToken { expired_at: i64 },
    #[error("authentication endpoint failed: {0}")]
    Endpoint(#[from] EndpointError),
    #[error("no authenticated session")]
    NotAuthenticated,
    #[error("token storage failed: {0}")]
    Storage(String),
}
