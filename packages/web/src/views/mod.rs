mod layouts;
pub use layouts::{RequireAdmin, RequireAuth, RequireVerified, Shell};

mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod dashboard;
pub use dashboard::Dashboard;

mod profile;
pub use profile::Profile;

mod admin;
pub use admin::AdminPanel;

mod classify;
pub use classify::Classify;

use crate::Route;

/// Route to open after a successful login, given the remembered `from` path.
pub(crate) fn return_route(from: &str) -> Route {
    session::sanitize_return_path(from)
        .parse()
        .unwrap_or(Route::Dashboard {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_route() {
        assert_eq!(return_route(""), Route::Dashboard {});
        assert_eq!(return_route("/profile"), Route::Profile {});
        assert_eq!(return_route("/admin"), Route::AdminPanel {});
        assert_eq!(return_route("/classify"), Route::Classify {});
        assert_eq!(return_route("https://elsewhere.example/admin"), Route::Dashboard {});
    }

    #[test]
    fn test_guarded_route_round_trips_through_login() {
        let from = Route::Profile {}.to_string();
        assert_eq!(from, "/profile");
        assert_eq!(return_route(&from), Route::Profile {});
    }
}
