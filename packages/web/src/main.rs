use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    AdminPanel, Classify, Dashboard, Landing, Login, Profile, RequireAdmin, RequireAuth,
    RequireVerified, Shell, Signup,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Landing {},
        #[route("/login?:from")]
        Login { from: String },
        #[route("/signup")]
        Signup {},
        #[layout(RequireAuth)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/profile")]
            Profile {},
        #[end_layout]
        #[layout(RequireVerified)]
            #[route("/classify")]
            Classify {},
        #[end_layout]
        #[layout(RequireAdmin)]
            #[route("/admin")]
            AdminPanel {},
}

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting EcoVision");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "EcoVision" }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
