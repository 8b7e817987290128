//! Configuration types for Legis components.
//!
//! Everything here is built once at startup and handed to the client by
//! value; nothing is read from the environment after that point.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::AppError;

/// Environment variable holding the OAuth client identifier.
pub const CLIENT_ID_ENV: &str = "LEGIFRANCE_CLIENT_ID";
/// Environment variable holding the OAuth client secret.
pub const CLIENT_SECRET_ENV: &str = "LEGIFRANCE_CLIENT_SECRET";

/// Sandbox base URL of the Legifrance engine on the PISTE gateway.
pub const DEFAULT_BASE_URL: &str = "https://sandbox-api.piste.gouv.fr/dila/legifrance/lf-engine-app";
/// Sandbox OAuth token endpoint on the PISTE gateway.
pub const DEFAULT_OAUTH_URL: &str = "https://sandbox-oauth.piste.gouv.fr/api/oauth/token";

/// OAuth client credentials.
///
/// No validation is performed; empty values are sent as-is and rejected by
/// the token endpoint.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// The two endpoints the client talks to.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub base_url: Url,
    pub oauth_url: Url,
}

impl Endpoints {
    /// Parses both endpoint URLs.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidUrl` naming the first URL that fails to parse.
    pub fn new(base_url: &str, oauth_url: &str) -> Result<Self, AppError> {
        let base_url =
            Url::parse(base_url).map_err(|_| AppError::InvalidUrl(base_url.to_string()))?;
        let oauth_url =
            Url::parse(oauth_url).map_err(|_| AppError::InvalidUrl(oauth_url.to_string()))?;
        Ok(Self {
            base_url,
            oauth_url,
        })
    }

    /// Full URL of the `search` operation.
    ///
    /// `Url::join` would drop the last path segment of a base without a
    /// trailing slash, so the path is appended by hand.
    pub fn search_url(&self) -> Result<Url, AppError> {
        let raw = format!("{}/search", self.base_url.as_str().trim_end_matches('/'));
        Url::parse(&raw).map_err(|_| AppError::InvalidUrl(raw))
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_OAUTH_URL)
            .unwrap_or_else(|e| unreachable!("default endpoints are valid URLs: {e}"))
    }
}

/// HTTP client configuration for external API calls.
pub struct HttpConfig {
    pub timeout: Duration,
    pub user_agent: &'static str,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "Legis/0.1 (legifrance-client)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_config_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("Legis/"));
    }

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.oauth_url.as_str(), DEFAULT_OAUTH_URL);
        assert_eq!(
            endpoints.search_url().unwrap().as_str(),
            "https://sandbox-api.piste.gouv.fr/dila/legifrance/lf-engine-app/search"
        );
    }

    #[test]
    fn test_search_url_with_trailing_slash() {
        let endpoints = Endpoints::new("http://localhost:8080/api/", "http://localhost:8080/token")
            .unwrap();
        assert_eq!(
            endpoints.search_url().unwrap().as_str(),
            "http://localhost:8080/api/search"
        );
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = Endpoints::new("not-a-url", DEFAULT_OAUTH_URL);
        match result {
            Err(AppError::InvalidUrl(url)) => assert_eq!(url, "not-a-url"),
            other => panic!("Expected AppError::InvalidUrl, got {:?}", other),
        }
    }

    #[test]
    fn test_credentials_debug_hides_secret() {
        let creds = Credentials::new("my-id", "super-secret");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("my-id"));
        assert!(!debug.contains("super-secret"));
        assert_eq!(creds.client_secret(), "super-secret");
    }
}
