use legis_core::config::{Credentials, HttpConfig};
use legis_core::error::AppError;
use legis_core::models::AccessToken;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, error};

use crate::http::{build_client, send_error};

const GRANT_TYPE: &str = "client_credentials";
const SCOPE: &str = "openid";

/// Successful answer of the OAuth token endpoint.
///
/// `expires_in` and `token_type` are sent too but not used.
#[derive(Deserialize, Debug)]
struct TokenResponse {
    access_token: String,
}

/// Exchanges client credentials for a bearer token.
///
/// Every call performs one form-encoded POST to the token endpoint; tokens
/// are neither cached nor refreshed.
///
/// # Examples
///
/// ```no_run
/// use legis_client::Authenticator;
/// use legis_core::{Credentials, Endpoints};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let endpoints = Endpoints::default();
/// let auth = Authenticator::new(Credentials::new("id", "secret"), endpoints.oauth_url)?;
///
/// match auth.fetch_token().await {
///     Some(token) => println!("Token: {}", token.preview()),
///     None => println!("Authentication failed"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Authenticator {
    client: Client,
    token_url: Url,
    credentials: Credentials,
    timeout_secs: u64,
}

impl Authenticator {
    /// Creates an authenticator with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ClientError` if the HTTP client cannot be built.
    pub fn new(credentials: Credentials, token_url: Url) -> Result<Self, AppError> {
        let config = HttpConfig::default();
        let client = build_client(&config)?;
        Ok(Self::with_client(
            client,
            credentials,
            token_url,
            config.timeout.as_secs(),
        ))
    }

    pub(crate) fn with_client(
        client: Client,
        credentials: Credentials,
        token_url: Url,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client,
            token_url,
            credentials,
            timeout_secs,
        }
    }

    /// Requests a token.
    ///
    /// # Errors
    ///
    /// Returns `AppError::AuthenticationFailed` with the status and body when
    /// the endpoint answers anything but 200.
    /// Returns `AppError::SerializationError` if a 200 body has no `access_token`.
    /// Returns `AppError::NetworkError` or `AppError::Timeout` on transport failures.
    pub async fn try_fetch_token(&self) -> Result<AccessToken, AppError> {
        let form = [
            ("grant_type", GRANT_TYPE),
            ("client_id", self.credentials.client_id()),
            ("client_secret", self.credentials.client_secret()),
            ("scope", SCOPE),
        ];

        debug!("Requesting access token from {}", self.token_url);

        let response = self
            .client
            .post(self.token_url.clone())
            .form(&form)
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout_secs))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::ClientError(e.to_string()))?;

        if status != StatusCode::OK {
            return Err(AppError::AuthenticationFailed {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        Ok(AccessToken::new(token.access_token))
    }

    /// Requests a token, logging and swallowing any failure.
    ///
    /// `None` means authentication failed for this call; it is not retried.
    pub async fn fetch_token(&self) -> Option<AccessToken> {
        match self.try_fetch_token().await {
            Ok(token) => Some(token),
            Err(e) => {
                error!("Authentication error: {}", e);
                None
            }
        }
    }
}
