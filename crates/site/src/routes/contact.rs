//! Contact form route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::forms::ContactForm;
use crate::state::AppState;

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub form: ContactForm,
    pub error: Option<String>,
    pub sent: bool,
}

/// GET /contact
pub async fn show() -> impl IntoResponse {
    ContactTemplate {
        form: ContactForm::default(),
        error: None,
        sent: false,
    }
}

/// Forward a contact form submission to the backend.
///
/// POST /contact
///
/// Invalid input is rejected before anything is sent. On success the form is
/// cleared and a confirmation shown; on failure the form keeps its values.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> impl IntoResponse {
    let submission = match form.to_submission() {
        Ok(submission) => submission,
        Err(message) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                ContactTemplate {
                    form,
                    error: Some(message.to_string()),
                    sent: false,
                },
            );
        }
    };

    match state.backend().submit_contact(&submission).await {
        Ok(()) => {
            tracing::info!("Contact message forwarded");
            (
                StatusCode::OK,
                ContactTemplate {
                    form: ContactForm::default(),
                    error: None,
                    sent: true,
                },
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to forward contact message");
            (
                StatusCode::BAD_GATEWAY,
                ContactTemplate {
                    form,
                    error: Some(e.user_message("Something went wrong. Please try again.")),
                    sent: false,
                },
            )
        }
    }
}
