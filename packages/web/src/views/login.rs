//! Login page with email/password form, Google sign-in and password reset.

use chrono::Utc;
use dioxus::prelude::*;
use session::issuer::{issue_login_token, validate_login};
use ui::{use_session, AuthMode, GoogleAuthButton};

use super::return_route;
use crate::Route;

/// Login page component. `from` is the page the visitor was sent away from.
#[component]
pub fn Login(from: String) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut show_forgot = use_signal(|| false);
    let mut reset_email = use_signal(String::new);

    let target = return_route(&from);

    // If already logged in, go straight to the destination
    let view = session.view.cloned();
    if !view.is_loading() && view.is_authenticated() {
        nav.replace(target.clone());
    }

    let login_session = session.clone();
    let login_target = target.clone();
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = login_session.clone();
        let target = login_target.clone();
        spawn(async move {
            error.set(None);

            let address = email().trim().to_string();
            if let Err(invalid) = validate_login(&address, &password()) {
                error.set(Some(invalid.to_string()));
                return;
            }

            loading.set(true);
            let result = match issue_login_token(&address, Utc::now(), session.config()) {
                Ok(token) => session.login(&token).await,
                Err(issue_error) => Err(issue_error),
            };
            loading.set(false);

            match result {
                Ok(_) => {
                    nav.replace(target);
                }
                Err(e) => {
                    tracing::error!("Login failed: {}", e);
                    error.set(Some(
                        "Login failed. Please check your credentials and try again.".to_string(),
                    ));
                }
            }
        });
    };

    let reset_session = session.clone();
    let handle_reset = move |evt: FormEvent| {
        evt.prevent_default();
        let session = reset_session.clone();
        spawn(async move {
            let address = reset_email().trim().to_string();
            if address.is_empty() {
                error.set(Some("Please enter your email address".to_string()));
                return;
            }
            if session.reset_password(&address).await.is_ok() {
                show_forgot.set(false);
                reset_email.set(String::new());
            }
        });
    };

    let google_target = target.clone();

    rsx! {
        div {
            class: "login-container",
            style: "display: flex; flex-direction: column; align-items: center; min-height: 80vh; padding: 2rem;",

            h1 { style: "font-size: 1.75rem; font-weight: 700; color: #111827; margin-bottom: 0.5rem;", "Welcome back" }
            p { style: "color: #6b7280; margin-bottom: 2rem;", "Sign in to continue classifying your e-waste" }

            div {
                style: "display: flex; flex-direction: column; gap: 1rem; width: 100%; max-width: 360px;",

                GoogleAuthButton {
                    mode: AuthMode::Login,
                    class: "btn google-btn",
                    on_success: move |_| {
                        nav.replace(google_target.clone());
                    },
                }

                if let Some(message) = error() {
                    p { class: "form-error", style: "color: #dc2626;", "{message}" }
                }

                if show_forgot() {
                    form {
                        onsubmit: handle_reset,
                        style: "display: flex; flex-direction: column; gap: 0.75rem;",
                        input {
                            r#type: "email",
                            placeholder: "Enter your email",
                            value: "{reset_email}",
                            oninput: move |e| reset_email.set(e.value()),
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Send reset link" }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| show_forgot.set(false),
                            "Back to sign in"
                        }
                    }
                } else {
                    form {
                        onsubmit: handle_login,
                        style: "display: flex; flex-direction: column; gap: 0.75rem;",
                        input {
                            r#type: "email",
                            placeholder: "Enter your email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                        input {
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| show_forgot.set(true),
                            "Forgot password?"
                        }
                    }
                }

                p {
                    style: "color: #6b7280; font-size: 0.875rem;",
                    "No account yet? "
                    Link { to: Route::Signup {}, "Create one" }
                }
            }
        }
    }
}
