//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use possystem_core::DashboardStats;

use super::{AdminChrome, session_expired};
use crate::filters;
use crate::middleware::AdminSession;
use crate::state::AppState;

/// Shown when any of the three counts cannot be fetched.
const DASHBOARD_ERROR: &str = "Failed to fetch dashboard data.";

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub chrome: AdminChrome,
    pub stats: Option<DashboardStats>,
    pub error: Option<String>,
}

/// Display message, subscriber and blog post counts.
///
/// GET /auth/dashboard
///
/// The three lists are fetched concurrently. All three must succeed; a
/// single failure shows an error and no partial counts.
#[instrument(skip(state, admin))]
pub async fn show(State(state): State<AppState>, admin: AdminSession) -> Response {
    let backend = state.backend();
    let token = admin.token();

    let result = tokio::try_join!(
        backend.list_messages(token),
        backend.list_subscribers(token),
        backend.list_posts_as(token),
    );

    let (stats, error) = match result {
        Ok((messages, subscribers, posts)) => (
            Some(DashboardStats {
                messages: messages.len(),
                subscribers: subscribers.len(),
                blog_posts: posts.len(),
            }),
            None,
        ),
        Err(e) if e.is_unauthorized() => return session_expired(&admin).await,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch dashboard data");
            (None, Some(e.generic_message(DASHBOARD_ERROR)))
        }
    };

    DashboardTemplate {
        chrome: AdminChrome::load(&admin, "/auth/dashboard").await,
        stats,
        error,
    }
    .into_response()
}
