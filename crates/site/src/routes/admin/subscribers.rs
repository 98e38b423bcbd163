//! Newsletter subscribers view and CSV export.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use possystem_core::Subscriber;

use super::{AdminChrome, session_expired};
use crate::export::{CSV_FILE_NAME, csv_data_uri, subscribers_csv};
use crate::filters;
use crate::middleware::AdminSession;
use crate::routes::display_datetime;
use crate::state::AppState;

/// A subscriber as shown in the table.
#[derive(Debug, Clone)]
pub struct SubscriberRow {
    pub email: String,
    pub subscribed: String,
}

impl From<&Subscriber> for SubscriberRow {
    fn from(subscriber: &Subscriber) -> Self {
        Self {
            email: subscriber.email.clone(),
            subscribed: display_datetime(subscriber.created()),
        }
    }
}

/// Subscribers template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/subscribers.html")]
pub struct SubscribersTemplate {
    pub chrome: AdminChrome,
    pub subscribers: Vec<SubscriberRow>,
    /// `data:` URI of the CSV export. `None` disables the download link.
    pub export_href: Option<String>,
    pub export_name: &'static str,
    pub error: Option<String>,
}

/// CSV download link for a fetched list. Nothing to export when empty.
fn export_href(subscribers: &[Subscriber]) -> Option<String> {
    if subscribers.is_empty() {
        None
    } else {
        Some(csv_data_uri(&subscribers_csv(subscribers)))
    }
}

/// List subscribers with a CSV export of the same list.
///
/// GET /auth/dashboard/subscribers
#[instrument(skip(state, admin))]
pub async fn index(State(state): State<AppState>, admin: AdminSession) -> Response {
    let (subscribers, export, error) =
        match state.backend().list_subscribers(admin.token()).await {
            Ok(subscribers) => (
                subscribers.iter().map(SubscriberRow::from).collect(),
                export_href(&subscribers),
                None,
            ),
            Err(e) if e.is_unauthorized() => return session_expired(&admin).await,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch subscribers");
                (
                    Vec::new(),
                    None,
                    Some(e.user_message("Failed to fetch subscribers.")),
                )
            }
        };

    SubscribersTemplate {
        chrome: AdminChrome::load(&admin, "/auth/dashboard/subscribers").await,
        subscribers,
        export_href: export,
        export_name: CSV_FILE_NAME,
        error,
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_export_for_empty_list() {
        assert!(export_href(&[]).is_none());
    }

    #[test]
    fn test_export_embeds_csv() {
        let subscribers = vec![Subscriber {
            email: "x@y.com".to_string(),
            created_at: Some("2024-01-01T00:00:00Z".to_string()),
            ..Subscriber::default()
        }];
        let href = export_href(&subscribers).unwrap_or_default();
        assert_eq!(
            href,
            csv_data_uri("Email,Subscription Date\nx@y.com,2024-01-01T00:00:00.000Z")
        );
    }
}
