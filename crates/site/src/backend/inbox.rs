//! Contact messages and newsletter subscriptions.

use reqwest::Method;
use secrecy::SecretString;
use tracing::instrument;

use possystem_core::{ContactMessage, ContactSubmission, Subscriber};

use super::{BackendClient, BackendError, MessagesEnvelope, SubscriptionsEnvelope};

impl BackendClient {
    /// Fetch every contact message.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a message list.
    #[instrument(skip_all)]
    pub async fn list_messages(
        &self,
        token: &SecretString,
    ) -> Result<Vec<ContactMessage>, BackendError> {
        let envelope: MessagesEnvelope = self.get("/api/contact", Some(token)).await?;
        Ok(envelope.messages.unwrap_or_default())
    }

    /// Fetch every newsletter subscriber.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a subscriber list.
    #[instrument(skip_all)]
    pub async fn list_subscribers(
        &self,
        token: &SecretString,
    ) -> Result<Vec<Subscriber>, BackendError> {
        let envelope: SubscriptionsEnvelope = self.get("/api/subscriptions", Some(token)).await?;
        Ok(envelope.subscriptions.unwrap_or_default())
    }

    /// Forward a public contact form submission.
    ///
    /// # Errors
    ///
    /// Returns error if the backend rejects the message or cannot be reached.
    #[instrument(skip(self, submission), fields(email = %submission.email))]
    pub async fn submit_contact(&self, submission: &ContactSubmission) -> Result<(), BackendError> {
        self.send_json(Method::POST, "/api/contact", None, submission)
            .await
    }
}
