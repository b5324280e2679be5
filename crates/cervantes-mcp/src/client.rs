//! Cervantes API transport client.
//!
//! Single point of outbound communication. Owns the connection profile
//! (base URL, Basic auth header, JSON content negotiation) and exposes the
//! generic verb methods the tool modules are built on. No retries, no
//! caching, no per-call deadline beyond reqwest's defaults; any transport
//! failure or non-2xx status is logged with the failing verb and path and
//! returned to the caller unchanged.

use crate::config::CervantesConfig;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

/// Cervantes API client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Response body could not be decoded.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// HTTP client for the Cervantes REST API.
///
/// One instance is shared by every tool; each call builds its own request,
/// so concurrent use needs no locking.
#[derive(Clone)]
pub struct CervantesClient {
    /// HTTP client instance with default headers baked in.
    client: Client,

    /// Resolved connection configuration.
    config: CervantesConfig,
}

impl CervantesClient {
    /// Create a new client from a resolved configuration.
    ///
    /// The Basic Authorization header is computed once here, if and only if
    /// the auth method is [`crate::config::AuthMethod::BasicAuth`] and both
    /// username and password are non-empty.
    pub fn new(config: CervantesConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if config.has_basic_credentials() {
            let token = BASE64.encode(format!("{}:{}", config.username, config.password));
            let value = HeaderValue::from_str(&format!("Basic {}", token))
                .expect("base64 token is always a valid header value");
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Build a full URL by appending a path to the base URL.
    fn url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Issue a GET and decode the JSON body.
    ///
    /// Returns `Ok(None)` when the body is empty or literal `null` (the wire
    /// contract for "not found" on lookup endpoints).
    pub async fn get<T>(&self, path: &str) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        debug!("GET {}", path);
        let response = self.client.get(self.url(path)).send().await;
        self.decode("GET", path, response).await
    }

    /// POST a JSON body and decode the response.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}", path);
        let response = self.client.post(self.url(path)).json(body).send().await;
        self.decode("POST", path, response).await
    }

    /// POST a JSON body; the response body is ignored.
    ///
    /// Returns `Ok(true)` on any 2xx status and an error otherwise. It never
    /// returns `Ok(false)`: failure always surfaces through the error path.
    pub async fn post_ok<B>(&self, path: &str, body: &B) -> Result<bool, ApiError>
    where
        B: Serialize + ?Sized,
    {
        debug!("POST {}", path);
        let response = self.client.post(self.url(path)).json(body).send().await;
        self.succeed("POST", path, response).await
    }

    /// PUT a JSON body and decode the response.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("PUT {}", path);
        let response = self.client.put(self.url(path)).json(body).send().await;
        self.decode("PUT", path, response).await
    }

    /// PUT a JSON body; the response body is ignored.
    ///
    /// Same success contract as [`CervantesClient::post_ok`].
    pub async fn put_ok<B>(&self, path: &str, body: &B) -> Result<bool, ApiError>
    where
        B: Serialize + ?Sized,
    {
        debug!("PUT {}", path);
        let response = self.client.put(self.url(path)).json(body).send().await;
        self.succeed("PUT", path, response).await
    }

    /// Issue a DELETE.
    ///
    /// Returns `Ok(true)` on any 2xx status and an error otherwise.
    pub async fn delete(&self, path: &str) -> Result<bool, ApiError> {
        debug!("DELETE {}", path);
        let response = self.client.delete(self.url(path)).send().await;
        self.succeed("DELETE", path, response).await
    }

    /// Check the status and decode the JSON body into `Option<T>`.
    async fn decode<T>(
        &self,
        verb: &str,
        path: &str,
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.checked(verb, path, response).await?;

        let body = response.text().await.map_err(|e| {
            error!("Error reading body for {} {}: {}", verb, path, e);
            ApiError::Request(e)
        })?;

        if body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Error decoding response for {} {}: {}", verb, path, e);
            ApiError::InvalidResponse(e.to_string())
        })
    }

    /// Check the status and discard the body.
    async fn succeed(
        &self,
        verb: &str,
        path: &str,
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<bool, ApiError> {
        self.checked(verb, path, response).await?;
        Ok(true)
    }

    /// Map transport errors and non-success statuses, logging the verb and path.
    async fn checked(
        &self,
        verb: &str,
        path: &str,
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<reqwest::Response, ApiError> {
        let response = response.map_err(|e| {
            error!("Error calling {} {}: {}", verb, path, e);
            ApiError::Request(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(
                "Cervantes API error on {} {} ({}): {}",
                verb,
                path,
                status.as_u16(),
                body
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthMethod;

    #[test]
    fn test_url_joining() {
        let client = CervantesClient::new(CervantesConfig {
            base_url: "https://cervantes.example.com/".to_string(),
            ..Default::default()
        });

        assert_eq!(
            client.url("/api/Clients"),
            "https://cervantes.example.com/api/Clients"
        );
        assert_eq!(
            client.url("api/Clients"),
            "https://cervantes.example.com/api/Clients"
        );
    }

    #[test]
    fn test_client_without_credentials() {
        // Must not panic: no Authorization header is computed.
        let client = CervantesClient::new(CervantesConfig::default());
        assert!(!client.config.has_basic_credentials());
    }

    #[test]
    fn test_client_with_credentials() {
        let client = CervantesClient::new(CervantesConfig {
            username: "admin".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        });
        assert!(client.config.has_basic_credentials());
    }

    #[test]
    fn test_auth_method_none_skips_header() {
        let client = CervantesClient::new(CervantesConfig {
            username: "admin".to_string(),
            password: "secret".to_string(),
            auth_method: AuthMethod::None,
            ..Default::default()
        });
        assert!(!client.config.has_basic_credentials());
    }
}
