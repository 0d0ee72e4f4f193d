use dioxus::prelude::*;
use ui::use_session;

#[component]
pub fn AdminPanel() -> Element {
    let session = use_session();
    let view = session.view.cloned();
    let name = view
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        section {
            class: "admin-panel",
            h1 { style: "font-size: 2rem; font-weight: 700;", "Admin Panel" }
            p { style: "color: #6b7280;", "Signed in as {name}." }
        }
    }
}
