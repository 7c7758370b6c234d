use serde::{Deserialize, Serialize};

/// Top-level application settings, persisted as JSON in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    pub backend: BackendSettings,
    pub oauth: OAuthSettings,
}

/// Connection settings for the hosted bookmark backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendSettings {
    /// Base URL of the backend REST surface, without a trailing slash.
    pub base_url: String,
    /// API key sent as a bearer token. Empty means no Authorization header.
    pub api_key: String,
}

/// OAuth sign-in settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OAuthSettings {
    pub provider: String,
    /// Where the provider should send the user after a completed sign-in.
    pub redirect_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            backend: BackendSettings {
                base_url: "http://localhost:8090".to_string(),
                api_key: String::new(),
            },
            oauth: OAuthSettings {
                provider: "google".to_string(),
                redirect_url: "http://localhost:3000/dashboard".to_string(),
            },
        }
    }
}
