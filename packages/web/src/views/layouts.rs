//! Layouts shared by groups of routes: the page shell and the guards.

use dioxus::prelude::*;
use dioxus::router::Navigator;
use session::Access;
use ui::{use_session, AuthGuard, Navbar};

use crate::Route;

/// Navbar plus the routed page.
#[component]
pub fn Shell() -> Element {
    let session = use_session();
    let view = session.view.cloned();

    rsx! {
        Navbar {
            Link { to: Route::Landing {}, "EcoVision" }
            if view.is_authenticated() {
                Link { to: Route::Dashboard {}, "Dashboard" }
                Link { to: Route::Classify {}, "Classify" }
                Link { to: Route::Profile {}, "Profile" }
            }
            if view.is_admin() {
                Link { to: Route::AdminPanel {}, "Admin" }
            }
            if !view.is_loading() && !view.is_authenticated() {
                Link { to: Route::Login { from: String::new() }, "Login" }
                Link { to: Route::Signup {}, "Sign up" }
            }
        }
        main {
            style: "padding: 2rem;",
            Outlet::<Route> {}
        }
    }
}

/// Send the visitor to the login page, remembering where they were going.
fn redirect_to_login(nav: Navigator, route: &Route) {
    nav.replace(Route::Login {
        from: route.to_string(),
    });
}

#[component]
pub fn RequireAuth() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        AuthGuard {
            access: Access::Authenticated,
            on_redirect: move |_| redirect_to_login(nav, &route),
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn RequireAdmin() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        AuthGuard {
            access: Access::AdminOnly,
            on_redirect: move |_| redirect_to_login(nav, &route),
            Outlet::<Route> {}
        }
    }
}

/// Signed-in users whose email address has been confirmed.
#[component]
pub fn RequireVerified() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        AuthGuard {
            access: Access::VerifiedEmail,
            on_redirect: move |_| redirect_to_login(nav, &route),
            Outlet::<Route> {}
        }
    }
}
