use dioxus::prelude::*;

/// Placeholder for the image classifier. Reached only with a verified email.
#[component]
pub fn Classify() -> Element {
    rsx! {
        section {
            class: "classify",
            h1 { style: "font-size: 2rem; font-weight: 700;", "Classify e-waste" }
            p {
                style: "color: #6b7280;",
                "Upload a photo of an old device to learn how to recycle it. The classifier is not connected in this build."
            }
        }
    }
}
