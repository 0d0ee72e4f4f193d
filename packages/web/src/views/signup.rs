//! Signup page: account details, account type and terms.

use chrono::Utc;
use dioxus::prelude::*;
use session::issuer::{issue_signup_token, password_strength, validate_signup, SignupForm};
use session::AccountType;
use ui::{use_session, AuthMode, GoogleAuthButton};

use crate::Route;

fn strength_label(score: u8) -> &'static str {
    match score {
        0..=1 => "Very weak",
        2 => "Weak",
        3 => "Fair",
        4 => "Good",
        _ => "Strong",
    }
}

#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut account_type = use_signal(|| AccountType::General);
    let mut agree_to_terms = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let view = session.view.cloned();
    if !view.is_loading() && view.is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let strength = strength_label(password_strength(&password.read()));

    let signup_session = session.clone();
    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let session = signup_session.clone();
        spawn(async move {
            error.set(None);

            let form = SignupForm {
                name: name(),
                email: email().trim().to_string(),
                password: password(),
                confirm_password: confirm_password(),
                account_type: account_type(),
                agree_to_terms: agree_to_terms(),
            };
            if let Err(invalid) = validate_signup(&form) {
                error.set(Some(invalid.to_string()));
                return;
            }

            loading.set(true);
            let result = match issue_signup_token(&form, Utc::now(), session.config()) {
                Ok(token) => session.signup(&token).await,
                Err(issue_error) => Err(issue_error),
            };
            loading.set(false);

            match result {
                Ok(_) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::error!("Signup failed: {}", e);
                    error.set(Some("Account creation failed. Please try again.".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "signup-container",
            style: "display: flex; flex-direction: column; align-items: center; min-height: 80vh; padding: 2rem;",

            h1 { style: "font-size: 1.75rem; font-weight: 700; color: #111827; margin-bottom: 2rem;", "Create your account" }

            div {
                style: "display: flex; flex-direction: column; gap: 1rem; width: 100%; max-width: 360px;",

                GoogleAuthButton {
                    mode: AuthMode::Signup,
                    class: "btn google-btn",
                    on_success: move |_| {
                        nav.replace(Route::Dashboard {});
                    },
                }

                if let Some(message) = error() {
                    p { class: "form-error", style: "color: #dc2626;", "{message}" }
                }

                form {
                    onsubmit: handle_signup,
                    style: "display: flex; flex-direction: column; gap: 0.75rem;",
                    input {
                        placeholder: "Full name",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                    input {
                        r#type: "email",
                        placeholder: "Email address",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                    if !password.read().is_empty() {
                        span {
                            class: "password-strength",
                            style: "font-size: 0.75rem; color: #6b7280;",
                            "Strength: {strength}"
                        }
                    }
                    input {
                        r#type: "password",
                        placeholder: "Confirm password",
                        value: "{confirm_password}",
                        oninput: move |e| confirm_password.set(e.value()),
                    }
                    fieldset {
                        style: "display: flex; gap: 1rem; border: none; padding: 0;",
                        label {
                            input {
                                r#type: "radio",
                                name: "account-type",
                                checked: account_type() == AccountType::General,
                                onchange: move |_| account_type.set(AccountType::General),
                            }
                            " General user"
                        }
                        label {
                            input {
                                r#type: "radio",
                                name: "account-type",
                                checked: account_type() == AccountType::Admin,
                                onchange: move |_| account_type.set(AccountType::Admin),
                            }
                            " Administrator"
                        }
                    }
                    label {
                        input {
                            r#type: "checkbox",
                            checked: agree_to_terms(),
                            onchange: move |e| agree_to_terms.set(e.checked()),
                        }
                        " I agree to the Terms of Service and Privacy Policy"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Create account" }
                    }
                }

                p {
                    style: "color: #6b7280; font-size: 0.875rem;",
                    "Already registered? "
                    Link { to: Route::Login { from: String::new() }, "Sign in" }
                }
            }
        }
    }
}
