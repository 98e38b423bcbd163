//! Login, registration and token verification.

use secrecy::SecretString;
use tracing::instrument;

use possystem_core::{AuthToken, LoginRequest, Profile, RegisterRequest};

use super::{BackendClient, BackendError};

impl BackendClient {
    /// Exchange credentials for a session token.
    ///
    /// # Errors
    ///
    /// Returns error if the backend rejects the credentials or cannot be reached.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<SecretString, BackendError> {
        let token: AuthToken = self.post("/api/auth/login", None, request).await?;
        Ok(SecretString::from(token.token))
    }

    /// Create an account and return its session token.
    ///
    /// # Errors
    ///
    /// Returns error if the backend rejects the registration or cannot be reached.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<SecretString, BackendError> {
        let token: AuthToken = self.post("/api/auth/register", None, request).await?;
        Ok(SecretString::from(token.token))
    }

    /// Verify a token by fetching the profile it belongs to.
    ///
    /// # Errors
    ///
    /// Any non-success status means the token is not valid.
    #[instrument(skip_all)]
    pub async fn profile(&self, token: &SecretString) -> Result<Profile, BackendError> {
        self.get("/api/auth/profile", Some(token)).await
    }
}
