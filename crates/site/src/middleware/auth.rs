//! Admin authentication gate.
//!
//! Every request under `/auth/dashboard` passes through [`require_admin`],
//! which re-verifies the session's bearer token with the backend. Nothing is
//! cached between requests: a token revoked on the backend locks the console
//! on the next navigation.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use secrecy::SecretString;
use tower_sessions::Session;

use possystem_core::Profile;

use super::session_keys;
use crate::state::AppState;

/// Where unauthenticated admin requests are sent.
pub const LOGIN_PATH: &str = "/auth";

/// A verified admin session, injected by [`require_admin`].
///
/// Handlers take this as an extractor instead of reading the token from the
/// session themselves.
#[derive(Clone)]
pub struct AdminSession {
    token: SecretString,
    profile: Profile,
    session: Session,
}

impl AdminSession {
    /// The bearer token for backend calls.
    #[must_use]
    pub const fn token(&self) -> &SecretString {
        &self.token
    }

    /// The profile returned when the token was verified.
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The underlying session, for flash notices.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Drop the token from the session. Later admin requests redirect to login.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn invalidate(&self) -> Result<(), tower_sessions::session::Error> {
        clear_token(&self.session).await
    }
}

impl std::fmt::Debug for AdminSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSession")
            .field("token", &"[REDACTED]")
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

/// Returned when a handler asks for an [`AdminSession`] outside the gate.
#[derive(Debug)]
pub enum AdminAuthRejection {
    RedirectToLogin,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Self>()
            .cloned()
            .ok_or(AdminAuthRejection::RedirectToLogin)
    }
}

/// Read the stored bearer token, if any.
///
/// Session store failures are logged and treated as "no token".
pub async fn stored_token(session: &Session) -> Option<SecretString> {
    match session.get::<String>(session_keys::AUTH_TOKEN).await {
        Ok(token) => token.map(SecretString::from),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read auth token from session");
            None
        }
    }
}

/// Store a freshly issued bearer token, rotating the session ID.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn store_token(
    session: &Session,
    token: &SecretString,
) -> Result<(), tower_sessions::session::Error> {
    use secrecy::ExposeSecret;

    session.cycle_id().await?;
    session
        .insert(session_keys::AUTH_TOKEN, token.expose_secret())
        .await
}

/// Remove the bearer token from the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_token(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<String>(session_keys::AUTH_TOKEN).await?;
    Ok(())
}

/// Gate for the admin router.
///
/// 1. No token in the session: redirect to [`LOGIN_PATH`].
/// 2. Token rejected by `GET /api/auth/profile`, or the backend unreachable:
///    clear the token and redirect.
/// 3. Otherwise insert an [`AdminSession`] into the request and continue.
pub async fn require_admin(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = stored_token(&session).await else {
        tracing::debug!(path = %request.uri().path(), "No admin token, redirecting to login");
        return Redirect::to(LOGIN_PATH).into_response();
    };

    let profile = match state.backend().profile(&token).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::info!(error = %e, "Admin token rejected, clearing session");
            if let Err(e) = clear_token(&session).await {
                tracing::warn!(error = %e, "Failed to clear auth token");
            }
            return Redirect::to(LOGIN_PATH).into_response();
        }
    };

    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            email: profile.email.clone(),
            username: profile.name.clone(),
            ..Default::default()
        }));
    });

    request.extensions_mut().insert(AdminSession {
        token,
        profile,
        session,
    });

    next.run(request).await
}
