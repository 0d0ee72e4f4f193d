use dioxus::prelude::*;
use ui::use_session;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let view = session.view.cloned();
    let Some(user) = view.user else {
        return rsx! {};
    };
    let achievement_count = user.achievements.len();

    rsx! {
        section {
            class: "dashboard",
            h1 { style: "font-size: 2rem; font-weight: 700;", "Welcome back, {user.name}!" }
            div {
                class: "stats",
                style: "display: flex; gap: 1.5rem; margin-top: 1.5rem;",
                div {
                    class: "stat",
                    strong { "{user.classifications_count}" }
                    " items classified"
                }
                div {
                    class: "stat",
                    strong { "{achievement_count}" }
                    " achievements"
                }
            }
            if !user.achievements.is_empty() {
                ul {
                    class: "achievements",
                    for achievement in user.achievements.iter() {
                        li { key: "{achievement}", "{achievement}" }
                    }
                }
            }
        }
    }
}
