//! API location from the environment.

/// Environment variable holding the API origin.
pub const API_URL_VAR: &str = "ECOVISION_API_URL";

/// Where the authentication API lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Read `ECOVISION_API_URL`, loading a `.env` file first if present.
    /// Unset means same origin.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url = std::env::var(API_URL_VAR).unwrap_or_default();
        Self { base_url }
    }

    /// Apply to a session config unless the config already names an origin.
    pub fn apply(&self, config: session::SessionConfig) -> session::SessionConfig {
        if config.api_base_url.is_empty() && !self.base_url.is_empty() {
            config.with_api_base_url(self.base_url.clone())
        } else {
            config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session::SessionConfig;

    #[test]
    fn test_apply_keeps_explicit_origin() {
        let api = ApiConfig {
            base_url: "http://env.example".to_string(),
        };
        let explicit = SessionConfig::default().with_api_base_url("http://explicit.example");
        assert_eq!(api.apply(explicit).api_base_url, "http://explicit.example");
        assert_eq!(api.apply(SessionConfig::default()).api_base_url, "http://env.example");
        assert_eq!(ApiConfig::default().apply(SessionConfig::default()).api_base_url, "");
    }
}
