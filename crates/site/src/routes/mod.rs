//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Home page
//! GET  /about                   - About page
//! GET  /services                - Services page
//! GET  /reviews                 - Customer reviews
//! GET  /pricing                 - Pricing plans and FAQ
//! GET  /blog                    - Blog listing
//! GET  /blog/{id}               - Blog post
//! GET  /contact                 - Contact form
//! POST /contact                 - Contact form submission
//!
//! # Auth
//! GET  /auth                    - Login page (?mode=register for sign-up)
//! POST /auth/login              - Login action
//! POST /auth/register           - Registration action
//!
//! # Admin (requires a verified token)
//! GET  /auth/dashboard                      - Dashboard stats
//! GET  /auth/dashboard/blogs                - Blog post table
//! GET  /auth/dashboard/blogs/create         - New post editor
//! POST /auth/dashboard/blogs/create         - Create post
//! GET  /auth/dashboard/blogs/edit/{id}      - Edit post editor
//! POST /auth/dashboard/blogs/edit/{id}      - Update post
//! GET  /auth/dashboard/messages             - Contact messages
//! GET  /auth/dashboard/subscribers          - Subscribers and CSV export
//! POST /auth/dashboard/logout               - Logout action
//! ```

pub mod admin;
pub mod auth;
pub mod blog;
pub mod contact;
pub mod home;
pub mod pages;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Utc};

use crate::filters;
use crate::state::AppState;

/// Not found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;

/// Fallback for unknown paths.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate).into_response()
}

/// Create all routes for the site.
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .merge(pages::router())
        .nest("/blog", blog::router())
        .route("/contact", get(contact::show).post(contact::submit))
        .merge(auth::router())
        .nest("/auth/dashboard", admin::router(state))
        .fallback(not_found)
}

/// Short date for tables and cards, e.g. "Jan 5, 2024".
pub(crate) fn display_date(dt: Option<DateTime<Utc>>) -> String {
    dt.map_or_else(
        || "Unknown date".to_string(),
        |dt| dt.format("%b %-d, %Y").to_string(),
    )
}

/// Date and time, e.g. "Jan 5, 2024 14:03 UTC".
pub(crate) fn display_datetime(dt: Option<DateTime<Utc>>) -> String {
    dt.map_or_else(
        || "Unknown date".to_string(),
        |dt| dt.format("%b %-d, %Y %H:%M UTC").to_string(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use possystem_core::parse_timestamp;

    use super::*;

    #[test]
    fn test_display_date() {
        let dt = parse_timestamp("2024-01-05T14:03:00Z");
        assert_eq!(display_date(dt), "Jan 5, 2024");
        assert_eq!(display_datetime(dt), "Jan 5, 2024 14:03 UTC");
        assert_eq!(display_date(None), "Unknown date");
    }
}
