//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] builds the platform [`AppSession`] once, initializes it,
//! and shares a [`SessionHandle`] through the Dioxus context. Components read
//! the reactive [`SessionSnapshot`] from the handle and call its async methods;
//! every call refreshes the snapshot and turns the store's notices into toasts.

use std::time::Duration;

use dioxus::prelude::*;
use session::{ProfileUpdate, SessionConfig, SessionError, SessionSnapshot, SessionState, User};

use crate::platform::{make_session, sleep, AppSession};
use crate::toaster::{show_notices, ToastQueue, Toaster};

/// How often a held token is re-checked for expiry.
const EXPIRY_CHECK_INTERVAL: Duration = Duration::from_secs(60);

/// Handle to the application's session, shared through context.
#[derive(Clone)]
pub struct SessionHandle {
    store: AppSession,
    /// Reactive copy of the store's state.
    pub view: Signal<SessionSnapshot>,
    toasts: Signal<ToastQueue>,
}

impl SessionHandle {
    pub fn snapshot(&self) -> SessionSnapshot {
        self.view.cloned()
    }

    pub fn config(&self) -> &SessionConfig {
        self.store.config()
    }

    /// Copy the store's state into the signal and surface pending notices.
    fn sync(&self) {
        let mut view = self.view;
        view.set(self.store.snapshot());
        show_notices(self.toasts, self.store.take_notices());
    }

    pub async fn initialize(&self) {
        self.store.initialize().await;
        self.sync();
    }

    pub async fn login(&self, token: &str) -> Result<User, SessionError> {
        let result = self.store.login(token).await;
        self.sync();
        result
    }

    pub async fn signup(&self, token: &str) -> Result<User, SessionError> {
        let result = self.store.signup(token).await;
        self.sync();
        result
    }

    pub async fn login_with_google(&self, credential: &str) -> Result<User, SessionError> {
        // the store raises its own flag once polled; show it right away
        let mut view = self.view;
        view.write().pending = true;
        let result = self.store.login_with_google(credential).await;
        self.sync();
        result
    }

    pub async fn logout(&self) -> Result<(), SessionError> {
        let result = self.store.logout().await;
        self.sync();
        result
    }

    pub async fn reset_password(&self, email: &str) -> Result<(), SessionError> {
        let result = self.store.reset_password(email).await;
        self.sync();
        result
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, SessionError> {
        let result = self.store.update_profile(update).await;
        self.sync();
        result
    }

    pub async fn refresh(&self) -> SessionState {
        let state = self.store.refresh().await;
        self.sync();
        state
    }
}

/// Get the session handle.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Provider component that owns the session store.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn SessionProvider(#[props(default)] config: SessionConfig, children: Element) -> Element {
    let view = use_signal(SessionSnapshot::default);
    let toasts = use_signal(ToastQueue::default);
    let handle = use_hook(|| SessionHandle {
        store: make_session(config.clone()),
        view,
        toasts,
    });

    use_context_provider(|| toasts);
    use_context_provider(|| handle.clone());

    // Initialize, then keep checking the held token for expiry
    let lifecycle = handle.clone();
    use_future(move || {
        let handle = lifecycle.clone();
        async move {
            handle.initialize().await;
            loop {
                sleep(EXPIRY_CHECK_INTERVAL).await;
                if handle.view.read().is_authenticated() {
                    handle.refresh().await;
                }
            }
        }
    });

    rsx! {
        {children}
        Toaster {}
    }
}

/// Which form a [`GoogleAuthButton`] sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// Placeholder credential until the Google Identity Services client is wired in.
const MOCK_GOOGLE_CREDENTIAL: &str = "mock-google-token";

/// Button that signs in through the Google collaborator endpoint.
#[component]
pub fn GoogleAuthButton(
    mode: AuthMode,
    on_success: Option<EventHandler<()>>,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();
    let pending = session.view.read().pending;
    let label = match mode {
        AuthMode::Login => "Continue with Google",
        AuthMode::Signup => "Sign up with Google",
    };

    let onclick = move |_| {
        let session = session.clone();
        async move {
            match session.login_with_google(MOCK_GOOGLE_CREDENTIAL).await {
                Ok(_) => {
                    if let Some(handler) = on_success {
                        handler.call(());
                    }
                }
                Err(e) => tracing::error!("Google authentication failed: {}", e),
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: pending,
            onclick: onclick,
            if pending {
                "Loading..."
            } else {
                "{label}"
            }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: Option<EventHandler<()>>,
) -> Element {
    let session = use_session();

    let onclick = move |_| {
        let session = session.clone();
        async move {
            if let Err(e) = session.logout().await {
                tracing::warn!("Logout left a persisted token behind: {}", e);
            }
            if let Some(handler) = on_logout {
                handler.call(());
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
