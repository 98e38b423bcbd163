//! Contact messages view.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use possystem_core::ContactMessage;

use super::{AdminChrome, session_expired};
use crate::filters;
use crate::middleware::AdminSession;
use crate::routes::display_datetime;
use crate::state::AppState;

/// A message as shown in the inbox.
#[derive(Debug, Clone)]
pub struct MessageRow {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub received: String,
}

impl From<&ContactMessage> for MessageRow {
    fn from(message: &ContactMessage) -> Self {
        Self {
            name: message.name.clone(),
            email: message.email.clone(),
            subject: message.subject.clone(),
            body: message.message.clone(),
            received: display_datetime(message.created()),
        }
    }
}

/// Messages template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/messages.html")]
pub struct MessagesTemplate {
    pub chrome: AdminChrome,
    pub messages: Vec<MessageRow>,
    pub error: Option<String>,
}

/// List contact form submissions.
///
/// GET /auth/dashboard/messages
#[instrument(skip(state, admin))]
pub async fn index(State(state): State<AppState>, admin: AdminSession) -> Response {
    let (messages, error) = match state.backend().list_messages(admin.token()).await {
        Ok(messages) => (messages.iter().map(MessageRow::from).collect(), None),
        Err(e) if e.is_unauthorized() => return session_expired(&admin).await,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch messages");
            (Vec::new(), Some(e.user_message("Failed to fetch messages.")))
        }
    };

    MessagesTemplate {
        chrome: AdminChrome::load(&admin, "/auth/dashboard/messages").await,
        messages,
        error,
    }
    .into_response()
}
