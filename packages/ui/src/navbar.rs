use dioxus::prelude::*;

use crate::auth::{use_session, LogoutButton};

/// Top bar. Links are passed as children because only the app knows its routes.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            style: "display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; border-bottom: 1px solid #e5e7eb;",
            div {
                class: "navbar-links",
                style: "display: flex; gap: 1rem;",
                {children}
            }
            UserBadge {}
        }
    }
}

/// Name of the signed-in user with a role label and a logout button.
#[component]
pub fn UserBadge() -> Element {
    let session = use_session();
    let view = session.view.cloned();

    let Some(user) = view.user.as_ref() else {
        return rsx! {};
    };
    let role_label = if view.is_admin() { "Administrator" } else { "User" };
    let name = user.display_name().to_string();

    rsx! {
        div {
            class: "user-badge",
            style: "display: flex; align-items: center; gap: 0.75rem;",
            span { class: "user-name", "{name}" }
            span { class: "user-role", style: "font-size: 0.75rem; color: #6b7280;", "{role_label}" }
            LogoutButton { class: "btn btn-ghost" }
        }
    }
}
