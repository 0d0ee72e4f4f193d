//! Profile page: edit name and email, request a password reset.

use dioxus::prelude::*;
use session::ProfileUpdate;
use ui::use_session;

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let view = session.view.cloned();
    let current = view.user.clone();

    let initial_name = current.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let initial_email = current.as_ref().map(|u| u.email.clone()).unwrap_or_default();
    let mut name = use_signal(move || initial_name);
    let mut email = use_signal(move || initial_email);
    let mut saving = use_signal(|| false);

    let Some(user) = current else {
        return rsx! {};
    };
    let role_label = if view.is_admin() { "Administrator" } else { "User" };
    let verified_label = if user.email_verified { "Verified" } else { "Not verified" };

    let save_session = session.clone();
    let original = user.clone();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let session = save_session.clone();
        let original = original.clone();
        spawn(async move {
            let new_name = name().trim().to_string();
            let new_email = email().trim().to_string();
            let update = ProfileUpdate {
                name: (new_name != original.name).then_some(new_name),
                email: (new_email != original.email).then_some(new_email),
                avatar: None,
            };
            if update.is_empty() {
                return;
            }
            saving.set(true);
            if let Err(e) = session.update_profile(&update).await {
                tracing::warn!("Profile update failed: {}", e);
            }
            saving.set(false);
        });
    };

    let reset_session = session.clone();
    let reset_address = user.email.clone();
    let handle_reset = move |_| {
        let session = reset_session.clone();
        let address = reset_address.clone();
        async move {
            if let Err(e) = session.reset_password(&address).await {
                tracing::warn!("Password reset request failed: {}", e);
            }
        }
    };

    rsx! {
        section {
            class: "profile",
            style: "max-width: 32rem;",
            h1 { style: "font-size: 2rem; font-weight: 700;", "{user.name}" }
            p { style: "color: #6b7280;", "{user.email} · {role_label} · {verified_label}" }

            form {
                onsubmit: handle_save,
                style: "display: flex; flex-direction: column; gap: 0.75rem; margin-top: 2rem;",
                label { "Name" }
                input { value: "{name}", oninput: move |e| name.set(e.value()) }
                label { "Email" }
                input { r#type: "email", value: "{email}", oninput: move |e| email.set(e.value()) }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save changes" }
                }
            }

            button {
                class: "btn btn-secondary",
                style: "margin-top: 1rem;",
                onclick: handle_reset,
                "Send password reset email"
            }
        }
    }
}
