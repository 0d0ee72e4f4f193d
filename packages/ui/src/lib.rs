//! This crate contains all shared UI for the workspace.

mod platform;
pub use platform::{make_session, sleep, AppSession, PlatformStorage};

mod auth;
pub use auth::{use_session, AuthMode, GoogleAuthButton, LogoutButton, SessionHandle, SessionProvider};

mod guard;
pub use guard::{AccessRestricted, AuthGuard, AuthenticatingScreen, VerifyEmailNotice};

mod toaster;
pub use toaster::{Toast, ToastQueue, Toaster};

mod navbar;
pub use navbar::{Navbar, UserBadge};

/// Shared look for the full-page status screens.
pub(crate) const CENTERED: &str = "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem; text-align: center;";

/// Go back one entry in the browser history.
pub fn go_back() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}
