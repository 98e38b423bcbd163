//! Authentication route handlers.
//!
//! The backend issues the bearer token; the site only keeps it in the
//! server-side session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::backend::BackendError;
use crate::error::AppError;
use crate::filters;
use crate::flash::{self, Flash};
use crate::forms::{LoginForm, RegisterForm};
use crate::middleware::{clear_token, store_token, stored_token};
use crate::state::AppState;

/// Where a successful login lands.
pub const DASHBOARD_PATH: &str = "/auth/dashboard";

/// Fallback shown when the backend gives no reason for a failed login.
const GENERIC_AUTH_ERROR: &str = "An error occurred";

/// Which form the auth page shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    /// Parse the `mode` query value. Anything but `register` means login.
    #[must_use]
    pub fn from_query(mode: Option<&str>) -> Self {
        match mode {
            Some("register") => Self::Register,
            _ => Self::Login,
        }
    }

    #[must_use]
    pub const fn is_register(self) -> bool {
        matches!(self, Self::Register)
    }
}

/// Query string for `GET /auth`.
#[derive(Debug, Default, Deserialize)]
pub struct AuthQuery {
    #[serde(default)]
    pub mode: Option<String>,
}

/// Login and registration page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct AuthTemplate {
    pub mode: AuthMode,
    pub flash: Option<Flash>,
    pub error: Option<String>,
    pub name: String,
    pub email: String,
}

impl AuthTemplate {
    fn blank(mode: AuthMode, flash: Option<Flash>) -> Self {
        Self {
            mode,
            flash,
            error: None,
            name: String::new(),
            email: String::new(),
        }
    }
}

/// Render the auth page.
///
/// GET /auth
///
/// A session that already holds a valid token skips the form: admins go to
/// the dashboard, anyone else to the home page. A rejected token is dropped.
#[instrument(skip(state, session))]
pub async fn auth_page(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AuthQuery>,
) -> Response {
    if let Some(token) = stored_token(&session).await {
        match state.backend().profile(&token).await {
            Ok(profile) if profile.is_admin() => {
                return Redirect::to(DASHBOARD_PATH).into_response();
            }
            Ok(_) => return Redirect::to("/").into_response(),
            Err(e) => {
                tracing::info!(error = %e, "Stored token rejected, showing login");
                if let Err(e) = clear_token(&session).await {
                    tracing::warn!(error = %e, "Failed to clear auth token");
                }
            }
        }
    }

    let flash = flash::take(&session).await;
    AuthTemplate::blank(AuthMode::from_query(query.mode.as_deref()), flash).into_response()
}

/// Log in with email and password.
///
/// POST /auth/login
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let rerender = |error: String| AuthTemplate {
        mode: AuthMode::Login,
        flash: None,
        error: Some(error),
        name: String::new(),
        email: form.email.clone(),
    };

    let request = match form.to_request() {
        Ok(request) => request,
        Err(message) => {
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, rerender(message.to_string())).into_response());
        }
    };

    match state.backend().login(&request).await {
        Ok(token) => {
            store_token(&session, &token).await?;
            flash::push(
                &session,
                Flash::success("Login Successful", "Welcome back, admin!"),
            )
            .await?;
            tracing::info!("Admin logged in");
            Ok(Redirect::to(DASHBOARD_PATH).into_response())
        }
        Err(e) => {
            tracing::info!(error = %e, "Login rejected");
            Ok((failure_status(&e), rerender(e.user_message(GENERIC_AUTH_ERROR))).into_response())
        }
    }
}

/// Create an admin account.
///
/// POST /auth/register
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let rerender = |error: String| AuthTemplate {
        mode: AuthMode::Register,
        flash: None,
        error: Some(error),
        name: form.name.clone(),
        email: form.email.clone(),
    };

    let request = match form.to_request() {
        Ok(request) => request,
        Err(message) => {
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, rerender(message.to_string())).into_response());
        }
    };

    match state.backend().register(&request).await {
        Ok(token) => {
            store_token(&session, &token).await?;
            flash::push(
                &session,
                Flash::success(
                    "Registration Successful",
                    "Admin account created successfully.",
                ),
            )
            .await?;
            tracing::info!("Admin account registered");
            Ok(Redirect::to(DASHBOARD_PATH).into_response())
        }
        Err(e) => {
            tracing::info!(error = %e, "Registration rejected");
            Ok((failure_status(&e), rerender(e.user_message(GENERIC_AUTH_ERROR))).into_response())
        }
    }
}

/// Status for a re-rendered auth form after a backend failure.
const fn failure_status(error: &BackendError) -> StatusCode {
    match error {
        BackendError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        BackendError::Validation { .. } | BackendError::NotFound { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        BackendError::Network(_) | BackendError::Server { .. } | BackendError::Decode(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth", get(auth_page))
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_mode_from_query() {
        assert_eq!(AuthMode::from_query(Some("register")), AuthMode::Register);
        assert_eq!(AuthMode::from_query(Some("login")), AuthMode::Login);
        assert_eq!(AuthMode::from_query(Some("other")), AuthMode::Login);
        assert_eq!(AuthMode::from_query(None), AuthMode::Login);
    }

    #[test]
    fn test_failure_status() {
        assert_eq!(
            failure_status(&BackendError::Unauthorized {
                status: 401,
                message: None
            }),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            failure_status(&BackendError::Validation {
                status: 400,
                message: Some("Email taken".to_string())
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            failure_status(&BackendError::Decode("eof".to_string())),
            StatusCode::BAD_GATEWAY
        );
    }
}
