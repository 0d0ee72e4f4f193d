//! Route access decisions.
//!
//! The router asks [`decide`] what to do with a destination given the current
//! [`SessionSnapshot`]; rendering the outcome is left to the UI.

use crate::store::SessionSnapshot;

/// Where the login page sends the user when no return path is known.
pub const DEFAULT_RETURN_PATH: &str = "/dashboard";

/// Access requirement of a destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Access {
    #[default]
    Public,
    Authenticated,
    AdminOnly,
    /// Authenticated with a verified email address.
    VerifiedEmail,
}

/// What the router should show for a destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    /// The session is still initializing.
    Wait,
    /// Send the visitor to the login page, remembering the destination.
    RedirectToLogin,
    AccessDenied,
    VerifyEmail,
}

pub fn decide(access: Access, session: &SessionSnapshot) -> GuardOutcome {
    if access == Access::Public {
        return GuardOutcome::Render;
    }
    if session.is_loading() {
        return GuardOutcome::Wait;
    }
    let Some(user) = &session.user else {
        return GuardOutcome::RedirectToLogin;
    };
    match access {
        Access::AdminOnly if !session.is_admin() => GuardOutcome::AccessDenied,
        Access::VerifiedEmail if !user.email_verified => GuardOutcome::VerifyEmail,
        _ => GuardOutcome::Render,
    }
}

/// Accept `from` as a post-login destination only if it is a local absolute
/// path; anything else falls back to [`DEFAULT_RETURN_PATH`].
pub fn sanitize_return_path(from: &str) -> String {
    let from = from.trim();
    let local = from.starts_with('/')
        && !from.starts_with("//")
        && !from.starts_with("/\\")
        && !from.contains("://");
    let is_auth_page = from == "/login" || from.starts_with("/login?") || from == "/signup";
    if local && !is_auth_page {
        from.to_string()
    } else {
        DEFAULT_RETURN_PATH.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::store::SessionState;
    use crate::token::tests::claims;

    fn snapshot(state: SessionState, role: Option<Role>, verified: bool) -> SessionSnapshot {
        let user = role.map(|role| {
            let mut user = claims("u1", "Ann", role, 0, 1).user;
            user.email_verified = verified;
            user
        });
        SessionSnapshot {
            state,
            role: user.as_ref().map(|u| u.effective_role()),
            user,
            pending: false,
        }
    }

    #[test]
    fn test_public_always_renders() {
        let loading = snapshot(SessionState::Loading, None, false);
        assert_eq!(decide(Access::Public, &loading), GuardOutcome::Render);
        let anonymous = snapshot(SessionState::Anonymous, None, false);
        assert_eq!(decide(Access::Public, &anonymous), GuardOutcome::Render);
    }

    #[test]
    fn test_waits_while_loading() {
        for state in [SessionState::Uninitialized, SessionState::Loading] {
            let s = snapshot(state, None, false);
            assert_eq!(decide(Access::Authenticated, &s), GuardOutcome::Wait);
            assert_eq!(decide(Access::AdminOnly, &s), GuardOutcome::Wait);
        }
    }

    #[test]
    fn test_anonymous_is_redirected() {
        let s = snapshot(SessionState::Anonymous, None, false);
        assert_eq!(decide(Access::Authenticated, &s), GuardOutcome::RedirectToLogin);
        assert_eq!(decide(Access::AdminOnly, &s), GuardOutcome::RedirectToLogin);
        assert_eq!(decide(Access::VerifiedEmail, &s), GuardOutcome::RedirectToLogin);
    }

    #[test]
    fn test_admin_only() {
        let user = snapshot(SessionState::Authenticated, Some(Role::User), true);
        assert_eq!(decide(Access::AdminOnly, &user), GuardOutcome::AccessDenied);
        assert_eq!(decide(Access::Authenticated, &user), GuardOutcome::Render);

        let admin = snapshot(SessionState::Authenticated, Some(Role::Admin), true);
        assert_eq!(decide(Access::AdminOnly, &admin), GuardOutcome::Render);
    }

    #[test]
    fn test_verified_email() {
        let unverified = snapshot(SessionState::Authenticated, Some(Role::User), false);
        assert_eq!(decide(Access::VerifiedEmail, &unverified), GuardOutcome::VerifyEmail);
        assert_eq!(decide(Access::Authenticated, &unverified), GuardOutcome::Render);

        let verified = snapshot(SessionState::Authenticated, Some(Role::User), true);
        assert_eq!(decide(Access::VerifiedEmail, &verified), GuardOutcome::Render);
    }

    #[test]
    fn test_sanitize_return_path() {
        assert_eq!(sanitize_return_path("/reports"), "/reports");
        assert_eq!(sanitize_return_path("/admin?tab=users"), "/admin?tab=users");
        assert_eq!(sanitize_return_path(""), DEFAULT_RETURN_PATH);
        assert_eq!(sanitize_return_path("https://evil.example"), DEFAULT_RETURN_PATH);
        assert_eq!(sanitize_return_path("//evil.example"), DEFAULT_RETURN_PATH);
        assert_eq!(sanitize_return_path("/login"), DEFAULT_RETURN_PATH);
    }
}
