//! Route guard views.
//!
//! [`AuthGuard`] asks [`session::decide`] what to do with its children and
//! renders the matching screen. Redirecting is left to the caller through
//! `on_redirect`, since only the app knows its login route.

use dioxus::prelude::*;
use session::{decide, Access, GuardOutcome};

use crate::auth::use_session;
use crate::{go_back, CENTERED};

/// Renders `children` only when the session satisfies `access`.
#[component]
pub fn AuthGuard(access: Access, on_redirect: EventHandler<()>, children: Element) -> Element {
    let session = use_session();
    let view = session.view;

    use_effect(move || {
        if decide(access, &view.read()) == GuardOutcome::RedirectToLogin {
            on_redirect.call(());
        }
    });

    let outcome = decide(access, &view.read());
    match outcome {
        GuardOutcome::Render => children,
        GuardOutcome::Wait => rsx! { AuthenticatingScreen {} },
        GuardOutcome::AccessDenied => rsx! { AccessRestricted {} },
        GuardOutcome::VerifyEmail => rsx! { VerifyEmailNotice {} },
        GuardOutcome::RedirectToLogin => rsx! {},
    }
}

/// Shown while the session is still initializing.
#[component]
pub fn AuthenticatingScreen() -> Element {
    rsx! {
        div {
            class: "guard-waiting",
            style: CENTERED,
            h3 { style: "font-size: 1.125rem; font-weight: 600; color: #111827; margin-bottom: 0.5rem;", "Authenticating..." }
            p { style: "color: #4b5563;", "Please wait while we verify your credentials" }
        }
    }
}

#[component]
pub fn AccessRestricted() -> Element {
    rsx! {
        div {
            class: "guard-denied",
            style: CENTERED,
            h2 { style: "font-size: 1.5rem; font-weight: 700; color: #111827; margin-bottom: 1rem;", "Access Restricted" }
            p {
                style: "color: #4b5563; margin-bottom: 1.5rem; max-width: 28rem;",
                "This area is restricted to administrators only. Please contact your system administrator if you believe this is an error."
            }
            button { class: "btn btn-primary", onclick: move |_| go_back(), "Go Back" }
        }
    }
}

#[component]
pub fn VerifyEmailNotice() -> Element {
    rsx! {
        div {
            class: "guard-verify",
            style: CENTERED,
            h2 { style: "font-size: 1.5rem; font-weight: 700; color: #111827; margin-bottom: 1rem;", "Email Verification Required" }
            p {
                style: "color: #4b5563; margin-bottom: 1.5rem; max-width: 28rem;",
                "Please verify your email address to access this feature. Check your inbox for a verification link."
            }
            button { class: "btn btn-secondary", onclick: move |_| go_back(), "Go Back" }
        }
    }
}
