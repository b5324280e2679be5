//! Configuration for the Cervantes API connection.
//!
//! The configuration is resolved once at process start, then moved into the
//! [`crate::CervantesClient`] constructor. Credentials are baked into the
//! client at construction and never reloaded mid-session.

use serde::{Deserialize, Serialize};

/// Authentication scheme selector.
///
/// Only HTTP Basic is implemented; the selector exists so a token-based
/// scheme can be added without changing the configuration surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMethod {
    /// HTTP Basic authentication with the configured credential pair.
    #[default]
    BasicAuth,
    /// No authentication header.
    None,
}

impl AuthMethod {
    /// Parse the configuration string form ("BasicAuth" / "None").
    fn parse(s: &str) -> Self {
        match s {
            "None" => AuthMethod::None,
            _ => AuthMethod::BasicAuth,
        }
    }
}

/// Connection profile for the Cervantes REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CervantesConfig {
    /// Base URL of the Cervantes instance (e.g. "https://cervantes.example.com").
    pub base_url: String,

    /// Username for Basic authentication.
    pub username: String,

    /// Password for Basic authentication.
    pub password: String,

    /// Authentication scheme.
    pub auth_method: AuthMethod,
}

impl Default for CervantesConfig {
    /// Returns a default configuration suitable for local development.
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            username: String::new(),
            password: String::new(),
            auth_method: AuthMethod::BasicAuth,
        }
    }
}

impl CervantesConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CERVANTES_URL`: Cervantes base URL (default: http://localhost:5000)
    /// - `CERVANTES_USERNAME`: Basic auth username
    /// - `CERVANTES_PASSWORD`: Basic auth password
    /// - `CERVANTES_AUTH_METHOD`: "BasicAuth" (default) or "None"
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            base_url: std::env::var("CERVANTES_URL").unwrap_or(default.base_url),
            username: std::env::var("CERVANTES_USERNAME").unwrap_or_default(),
            password: std::env::var("CERVANTES_PASSWORD").unwrap_or_default(),
            auth_method: std::env::var("CERVANTES_AUTH_METHOD")
                .map(|s| AuthMethod::parse(&s))
                .unwrap_or(default.auth_method),
        }
    }

    /// Whether the configuration carries usable Basic credentials.
    ///
    /// The Authorization header is attached if and only if this holds.
    pub fn has_basic_credentials(&self) -> bool {
        self.auth_method == AuthMethod::BasicAuth
            && !self.username.is_empty()
            && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CervantesConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.auth_method, AuthMethod::BasicAuth);
        assert!(!config.has_basic_credentials());
    }

    #[test]
    fn test_basic_credentials_predicate() {
        let mut config = CervantesConfig {
            username: "admin".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };
        assert!(config.has_basic_credentials());

        config.password.clear();
        assert!(!config.has_basic_credentials());

        config.password = "secret".to_string();
        config.auth_method = AuthMethod::None;
        assert!(!config.has_basic_credentials());
    }

    #[test]
    fn test_auth_method_parse() {
        assert_eq!(AuthMethod::parse("BasicAuth"), AuthMethod::BasicAuth);
        assert_eq!(AuthMethod::parse("None"), AuthMethod::None);
        assert_eq!(AuthMethod::parse("anything-else"), AuthMethod::BasicAuth);
    }
}
