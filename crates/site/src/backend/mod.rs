//! Client for the content backend's REST API.
//!
//! Every page that shows blog posts, messages or subscribers reads them
//! through [`BackendClient`]. The backend is the only store, so nothing here
//! caches.
//!
//! # Endpoints
//!
//! - `POST /api/auth/login`, `POST /api/auth/register`, `GET /api/auth/profile`
//! - `GET /api/blog/posts`, `GET /api/blog/posts/{id}`
//! - `POST /api/blog/dashboard/blog`, `PUT /api/blog/posts/{id}`
//! - `GET /api/contact`, `POST /api/contact`
//! - `GET /api/subscriptions`
//!
//! Admin endpoints take a bearer token supplied by the caller.

mod auth;
mod blog;
mod inbox;
mod types;

pub use types::*;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

/// Message shown to users when the backend cannot be reached.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Errors returned by backend calls.
///
/// HTTP variants carry the `message` field of the backend's JSON error body
/// when it sent one.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Connection, timeout or I/O failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 401 or 403: the token is missing, expired or rejected.
    #[error("Unauthorized ({status})")]
    Unauthorized { status: u16, message: Option<String> },

    /// 404.
    #[error("Not found")]
    NotFound { message: Option<String> },

    /// Any other 4xx.
    #[error("Request rejected ({status})")]
    Validation { status: u16, message: Option<String> },

    /// 5xx or any other non-success status.
    #[error("Backend error ({status})")]
    Server { status: u16, message: Option<String> },

    /// A success response whose body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl BackendError {
    /// Classify a non-success status code.
    #[must_use]
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        let code = status.as_u16();
        match code {
            401 | 403 => Self::Unauthorized {
                status: code,
                message,
            },
            404 => Self::NotFound { message },
            400..=499 => Self::Validation {
                status: code,
                message,
            },
            _ => Self::Server {
                status: code,
                message,
            },
        }
    }

    /// The backend's own error message, if it sent one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message, .. }
            | Self::NotFound { message }
            | Self::Validation { message, .. }
            | Self::Server { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Text to show the user: the network message for transport failures,
    /// otherwise the backend's message or `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        if self.is_network() {
            return NETWORK_ERROR_MESSAGE.to_string();
        }
        self.message()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    /// Text to show the user when the backend's own message must not leak:
    /// the network message for transport failures, otherwise `fallback`.
    #[must_use]
    pub fn generic_message(&self, fallback: &str) -> String {
        if self.is_network() {
            NETWORK_ERROR_MESSAGE.to_string()
        } else {
            fallback.to_string()
        }
    }

    /// Whether the session token was rejected.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Whether the backend could not be reached at all.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// HTTP client for the content backend.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("possystem-site/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(BackendClientInner {
                client,
                base_url: base_url.as_str().trim_end_matches('/').to_string(),
            }),
        })
    }

    /// The backend origin, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Whether the backend answers HTTP at all. Any status counts.
    pub async fn is_reachable(&self) -> bool {
        self.inner
            .client
            .get(&self.inner.base_url)
            .send()
            .await
            .is_ok()
    }

    /// Start a request to `path`, attaching the bearer token when given.
    fn request(&self, method: Method, path: &str, token: Option<&SecretString>) -> RequestBuilder {
        let url = format!("{}{path}", self.inner.base_url);
        let builder = self.inner.client.request(method, url);
        match token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    /// Execute a GET request and parse the JSON body.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&SecretString>,
    ) -> Result<T, BackendError> {
        let response = self.request(Method::GET, path, token).send().await?;
        Self::handle_response(response).await
    }

    /// Execute a POST request and parse the JSON body.
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        token: Option<&SecretString>,
        body: &B,
    ) -> Result<T, BackendError> {
        let response = self
            .request(Method::POST, path, token)
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Execute a request whose response body is not needed.
    async fn send_json<B: serde::Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        token: Option<&SecretString>,
        body: &B,
    ) -> Result<(), BackendError> {
        let response = self.request(method, path, token).json(body).send().await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::parse_error(response).await)
    }

    /// Handle a response and parse its JSON body.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        if !response.status().is_success() {
            return Err(Self::parse_error(response).await);
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))
    }

    /// Build the error for a non-success response.
    async fn parse_error(response: reqwest::Response) -> BackendError {
        let status = response.status();
        let message = response
            .bytes()
            .await
            .ok()
            .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
            .and_then(|body| body.message);

        tracing::debug!(status = status.as_u16(), ?message, "Backend returned an error");
        BackendError::from_status(status, message)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn classify(code: u16) -> BackendError {
        BackendError::from_status(StatusCode::from_u16(code).unwrap(), None)
    }

    #[test]
    fn test_status_classification() {
        assert!(matches!(classify(401), BackendError::Unauthorized { status: 401, .. }));
        assert!(matches!(classify(403), BackendError::Unauthorized { status: 403, .. }));
        assert!(matches!(classify(404), BackendError::NotFound { .. }));
        assert!(matches!(classify(400), BackendError::Validation { status: 400, .. }));
        assert!(matches!(classify(422), BackendError::Validation { status: 422, .. }));
        assert!(matches!(classify(500), BackendError::Server { status: 500, .. }));
        assert!(matches!(classify(503), BackendError::Server { status: 503, .. }));
        assert!(matches!(classify(302), BackendError::Server { status: 302, .. }));
    }

    #[test]
    fn test_user_message_prefers_backend_message() {
        let err = BackendError::from_status(
            StatusCode::BAD_REQUEST,
            Some("Title is required".to_string()),
        );
        assert_eq!(err.user_message("Failed to create blog post."), "Title is required");
    }

    #[test]
    fn test_user_message_fallback() {
        let err = BackendError::from_status(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(err.user_message("An error occurred"), "An error occurred");

        let blank = BackendError::from_status(StatusCode::BAD_REQUEST, Some("  ".to_string()));
        assert_eq!(blank.user_message("An error occurred"), "An error occurred");

        let decode = BackendError::Decode("eof".to_string());
        assert_eq!(decode.user_message("Failed"), "Failed");
    }

    #[test]
    fn test_generic_message_ignores_backend_message() {
        let err = BackendError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("Mongo connection lost".to_string()),
        );
        assert_eq!(
            err.generic_message("Failed to fetch dashboard data."),
            "Failed to fetch dashboard data."
        );

        let missing = BackendError::from_status(StatusCode::NOT_FOUND, Some("No such post".to_string()));
        assert_eq!(
            missing.generic_message("Failed to fetch blog post."),
            "Failed to fetch blog post."
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let url = Url::parse("http://localhost:5000/").unwrap();
        let client = BackendClient::new(&url, Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Port 9 (discard) on loopback is closed in test environments.
        let url = Url::parse("http://127.0.0.1:9").unwrap();
        let client = BackendClient::new(&url, Duration::from_secs(2)).unwrap();
        let err = client.list_posts().await.unwrap_err();
        assert!(err.is_network());
        assert_eq!(err.user_message("x"), NETWORK_ERROR_MESSAGE);
        assert_eq!(err.generic_message("x"), NETWORK_ERROR_MESSAGE);
        assert!(!client.is_reachable().await);
    }
}
