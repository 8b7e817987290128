use thiserror::Error;

/// Application-wide error types.
///
/// The public `fetch_token` and `search` operations report failures as
/// absence plus a log line; the `try_*` variants return these errors so
/// callers that want details can match on them.
///
/// # Error Conversion
///
/// - `serde_json::Error` → `AppError::SerializationError`
///
/// # Examples
///
/// ```
/// use legis_core::error::AppError;
///
/// let err = AppError::AuthenticationFailed {
///     status: 401,
///     body: "invalid_client".to_string(),
/// };
/// assert_eq!(err.to_string(), "Authentication failed: HTTP 401 - invalid_client");
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// The OAuth token endpoint answered with something other than 200.
    #[error("Authentication failed: HTTP {status} - {body}")]
    AuthenticationFailed { status: u16, body: String },

    /// The search endpoint answered with a non-2xx status.
    #[error("Search request failed: HTTP {status} - {body}")]
    HttpStatus { status: u16, body: String },

    /// HTTP client request failed.
    ///
    /// Covers request building and body decoding failures that are neither
    /// connection problems nor timeouts.
    #[error("API Client error: {0}")]
    ClientError(String),

    /// JSON serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// An endpoint URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Network or connection error.
    ///
    /// DNS resolution failures, refused connections, unreachable hosts.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),
}

impl AppError {
    /// Returns a user-friendly error message suitable for CLI output.
    pub fn user_message(&self) -> String {
        match self {
            AppError::AuthenticationFailed { status, .. } if *status == 400 || *status == 401 => {
                "Legifrance rejected the client credentials.\n   Check LEGIFRANCE_CLIENT_ID and LEGIFRANCE_CLIENT_SECRET.".to_string()
            }
            AppError::AuthenticationFailed { status, body } => {
                format!("Authentication error: HTTP {} - {}", status, body)
            }
            AppError::HttpStatus { status, .. } if *status == 401 || *status == 403 => {
                "The search endpoint refused the bearer token.\n   The token may be missing or expired."
                    .to_string()
            }
            AppError::HttpStatus { status, body } => {
                format!("Search error: HTTP {} - {}", status, body)
            }
            AppError::InvalidUrl(url) => {
                format!(
                    "Invalid endpoint URL: {}\n   Example: https://sandbox-api.piste.gouv.fr/dila/legifrance/lf-engine-app",
                    url
                )
            }
            AppError::NetworkError(msg) => {
                format!("Network error: {}\n   Check your internet connection.", msg)
            }
            AppError::Timeout(secs) => {
                format!(
                    "Request timed out after {} seconds.\n   The API may be overloaded. Try again later.",
                    secs
                )
            }
            _ => self.to_string(),
        }
    }

    /// Returns the HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::AuthenticationFailed { status, .. } | AppError::HttpStatus { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}
