//! Command implementations.

pub mod auth;
pub mod inbox;
pub mod posts;

use std::time::Duration;

use possystem_site::backend::{BackendClient, BackendError};
use url::Url;

/// Commands wait longer than page handlers; exports can be large.
const CLI_TIMEOUT: Duration = Duration::from_secs(60);

/// Build a backend client for `backend_url`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn client(backend_url: &Url) -> Result<BackendClient, BackendError> {
    BackendClient::new(backend_url, CLI_TIMEOUT)
}
