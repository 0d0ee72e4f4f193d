use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

#[component]
pub fn Landing() -> Element {
    let session = use_session();
    let signed_in = session.view.read().is_authenticated();

    rsx! {
        section {
            class: "landing",
            style: "max-width: 48rem; margin: 4rem auto; text-align: center;",
            h1 { style: "font-size: 2.5rem; font-weight: 800; color: #111827;", "Sort your e-waste with confidence" }
            p {
                style: "color: #4b5563; margin: 1rem 0 2rem;",
                "Snap a photo of old electronics and EcoVision tells you how to recycle it responsibly."
            }
            if signed_in {
                Link { class: "btn btn-primary", to: Route::Dashboard {}, "Go to your dashboard" }
            } else {
                div {
                    style: "display: flex; gap: 1rem; justify-content: center;",
                    Link { class: "btn btn-primary", to: Route::Signup {}, "Get started" }
                    Link { class: "btn btn-secondary", to: Route::Login { from: String::new() }, "Sign in" }
                }
            }
        }
    }
}
