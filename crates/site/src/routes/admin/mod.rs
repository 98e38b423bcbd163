//! Admin console route handlers.
//!
//! Every route here sits behind [`require_admin`]. Handlers receive the
//! verified [`AdminSession`] and pass its token to the backend.

pub mod blogs;
pub mod dashboard;
pub mod messages;
pub mod subscribers;

use axum::{
    Router,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::flash::{self, Flash, FlashKind};
use crate::middleware::{AdminSession, LOGIN_PATH, require_admin};
use crate::state::AppState;

/// Console navigation, in sidebar order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/auth/dashboard", "Dashboard"),
    ("/auth/dashboard/blogs", "Blog Posts"),
    ("/auth/dashboard/blogs/create", "New Post"),
    ("/auth/dashboard/messages", "Messages"),
    ("/auth/dashboard/subscribers", "Subscribers"),
];

/// Shared console frame: who is signed in, where they are, and any notice.
#[derive(Debug, Clone)]
pub struct AdminChrome {
    pub admin_name: String,
    pub current_path: String,
    pub flash: Option<Flash>,
}

impl AdminChrome {
    /// Build the frame for a page, taking any queued notice.
    pub async fn load(admin: &AdminSession, current_path: &str) -> Self {
        Self {
            admin_name: admin.profile().display_name().to_string(),
            current_path: current_path.to_string(),
            flash: flash::take(admin.session()).await,
        }
    }

    /// Whether a nav link points at the current page.
    #[must_use]
    pub fn is_active(&self, href: &str) -> bool {
        self.current_path == href
    }

    #[must_use]
    pub const fn nav_links(&self) -> &'static [(&'static str, &'static str)] {
        NAV_LINKS
    }
}

/// End the session after the backend rejected its token mid-request.
pub(crate) async fn session_expired(admin: &AdminSession) -> Response {
    tracing::info!("Backend rejected admin token, ending session");
    if let Err(e) = admin.invalidate().await {
        tracing::warn!(error = %e, "Failed to clear auth token");
    }
    let notice = Flash {
        kind: FlashKind::Error,
        title: "Session expired".to_string(),
        message: "Please log in again.".to_string(),
    };
    if let Err(e) = flash::push(admin.session(), notice).await {
        tracing::warn!(error = %e, "Failed to queue session notice");
    }
    Redirect::to(LOGIN_PATH).into_response()
}

/// Log out.
///
/// POST /auth/dashboard/logout
#[instrument(skip(admin))]
pub async fn logout(admin: AdminSession) -> Response {
    if let Err(e) = admin.invalidate().await {
        tracing::warn!(error = %e, "Failed to clear auth token on logout");
    }
    if let Err(e) = flash::push(
        admin.session(),
        Flash::success("Logged out", "You have been successfully logged out."),
    )
    .await
    {
        tracing::warn!(error = %e, "Failed to queue logout notice");
    }
    sentry::configure_scope(|scope| scope.set_user(None));
    add_breadcrumb("auth", "Admin logged out");
    tracing::info!("Admin logged out");
    Redirect::to(LOGIN_PATH).into_response()
}

/// Build the admin router. Mounted at `/auth/dashboard`.
pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::show))
        .route("/blogs", get(blogs::index))
        .route("/blogs/create", get(blogs::new_form).post(blogs::create))
        .route("/blogs/edit/{id}", get(blogs::edit_form).post(blogs::update))
        .route("/messages", get(messages::index))
        .route("/subscribers", get(subscribers::index))
        .route("/logout", post(logout))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link() {
        let chrome = AdminChrome {
            admin_name: "Ada".to_string(),
            current_path: "/auth/dashboard/messages".to_string(),
            flash: None,
        };
        assert!(chrome.is_active("/auth/dashboard/messages"));
        assert!(!chrome.is_active("/auth/dashboard"));
    }
}
