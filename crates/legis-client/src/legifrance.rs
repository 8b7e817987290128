use std::fmt;

use legis_core::config::{Credentials, Endpoints, HttpConfig};
use legis_core::error::AppError;
use legis_core::models::AccessToken;
use legis_core::search::{Corpus, SearchRequest};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::auth::Authenticator;
use crate::http::{build_client, send_error};

/// Query used by [`LegifranceClient::ping`].
const PING_QUERY: &str = "Code civil";

/// HTTP client for the Legifrance search endpoint.
///
/// Each search is a single POST; when no token is passed in, one is fetched
/// from the [`Authenticator`] first. Nothing is retried or cached.
///
/// # Examples
///
/// ```no_run
/// use legis_client::LegifranceClient;
/// use legis_core::{extract_results, Credentials, Endpoints};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = LegifranceClient::new(Credentials::new("id", "secret"), Endpoints::default())?;
///
/// let response = client.search_code_article("Code civil", "1128").await;
/// for item in extract_results(response.as_ref()) {
///     println!("{} ({})", item.title, item.date);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LegifranceClient {
    client: Client,
    authenticator: Authenticator,
    search_url: Url,
    timeout_secs: u64,
}

impl LegifranceClient {
    /// Creates a client for the given endpoints.
    ///
    /// The credentials are moved into the client's [`Authenticator`] and are
    /// not read again from anywhere else.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidUrl` if the search URL cannot be derived.
    /// Returns `AppError::ClientError` if the HTTP client cannot be built.
    pub fn new(credentials: Credentials, endpoints: Endpoints) -> Result<Self, AppError> {
        let config = HttpConfig::default();
        let client = build_client(&config)?;
        let timeout_secs = config.timeout.as_secs();
        let search_url = endpoints.search_url()?;

        let authenticator = Authenticator::with_client(
            client.clone(),
            credentials,
            endpoints.oauth_url,
            timeout_secs,
        );

        Ok(Self {
            client,
            authenticator,
            search_url,
            timeout_secs,
        })
    }

    /// Runs a search and returns the raw JSON response.
    ///
    /// If `token` is `None` or empty a token is fetched first. When that
    /// fails the request is still sent, without an `Authorization` header,
    /// and the endpoint's rejection surfaces as the error.
    ///
    /// # Errors
    ///
    /// Returns `AppError::HttpStatus` for any non-2xx answer.
    /// Returns `AppError::NetworkError` or `AppError::Timeout` on transport failures.
    /// Returns `AppError::SerializationError` if the body is not JSON.
    pub async fn try_search(
        &self,
        request: &SearchRequest,
        token: Option<&AccessToken>,
    ) -> Result<Value, AppError> {
        let (status, body) = self.send_search(request, token).await?;

        if !status.is_success() {
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Sends the search POST and returns the status and raw body, whatever
    /// the status.
    async fn send_search(
        &self,
        request: &SearchRequest,
        token: Option<&AccessToken>,
    ) -> Result<(StatusCode, String), AppError> {
        let fetched;
        let token = match token.filter(|t| !t.as_str().is_empty()) {
            Some(token) => Some(token),
            None => {
                fetched = self.authenticator.fetch_token().await;
                fetched.as_ref()
            }
        };

        let payload = request.to_payload();
        debug!(
            "POST {} (fond: {:?}, page {}/{})",
            self.search_url, request.corpus, request.page, request.page_size
        );

        let mut builder = self
            .client
            .post(self.search_url.clone())
            .header(ACCEPT, "application/json")
            .json(&payload);

        match token {
            Some(token) => builder = builder.bearer_auth(token.as_str()),
            None => warn!("No access token available, sending search without bearer header"),
        }

        let response = builder
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout_secs))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::ClientError(e.to_string()))?;

        Ok((status, body))
    }

    /// Runs a search, logging and swallowing any failure.
    pub async fn search(
        &self,
        request: &SearchRequest,
        token: Option<&AccessToken>,
    ) -> Option<Value> {
        match self.try_search(request, token).await {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Search request error: {}", e);
                None
            }
        }
    }

    /// Approximate search for a legal question across law articles.
    pub async fn search_by_question(&self, question: &str) -> Option<Value> {
        self.search(&SearchRequest::question(question), None).await
    }

    /// Looks up an article by number inside a named code.
    pub async fn search_code_article(
        &self,
        code_name: &str,
        article_number: &str,
    ) -> Option<Value> {
        self.search(&SearchRequest::code_article(code_name, article_number), None)
            .await
    }

    /// Case-law search on a theme, most recent decisions first.
    pub async fn search_case_law(&self, theme: &str) -> Option<Value> {
        self.search(&SearchRequest::case_law(theme), None).await
    }

    /// Checks that authentication and a minimal search both work.
    ///
    /// Only an HTTP 200 counts as a successful search here.
    pub async fn ping(&self) -> PingOutcome {
        let Some(token) = self.authenticator.fetch_token().await else {
            return PingOutcome::AuthFailed;
        };
        info!("Token obtained: {}", token.preview());

        let request = SearchRequest {
            query: Some(PING_QUERY.to_string()),
            corpus: Corpus::CodeDate,
            page_size: 1,
            ..Default::default()
        };

        let (status, body) = match self.send_search(&request, Some(&token)).await {
            Ok(answer) => answer,
            Err(e) => {
                error!("Ping search failed: {}", e);
                return PingOutcome::Unreachable(e.to_string());
            }
        };

        if status != StatusCode::OK {
            error!("Ping search failed: HTTP {} - {}", status.as_u16(), body);
            return PingOutcome::RequestFailed {
                status: status.as_u16(),
            };
        }

        let response: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(e) => {
                warn!("Ping search returned a non-JSON body: {}", e);
                return PingOutcome::UnusualResponse;
            }
        };

        match response.get("results").and_then(Value::as_array) {
            Some(results) => PingOutcome::Connected {
                results: results.len(),
            },
            None => PingOutcome::UnusualResponse,
        }
    }
}

/// Result of [`LegifranceClient::ping`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PingOutcome {
    /// Authenticated and searched; `results` hits came back
    Connected { results: usize },
    /// Search answered 200 but the body was not JSON or had no `results` array
    UnusualResponse,
    /// No token could be obtained
    AuthFailed,
    /// The search endpoint answered with a status other than 200
    RequestFailed { status: u16 },
    /// The search never got an HTTP answer
    Unreachable(String),
}

impl fmt::Display for PingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PingOutcome::Connected { results } => write!(
                f,
                "Connected to Legifrance, {} result(s) returned",
                results
            ),
            PingOutcome::UnusualResponse => {
                write!(f, "Connected to Legifrance, unusual response structure")
            }
            PingOutcome::AuthFailed => {
                write!(f, "Could not connect to Legifrance (no access token)")
            }
            PingOutcome::RequestFailed { status } => {
                write!(f, "Legifrance search failed: HTTP {}", status)
            }
            PingOutcome::Unreachable(msg) => write!(f, "Legifrance unreachable: {}", msg),
        }
    }
}
