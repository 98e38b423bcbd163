//! One-shot notices carried across a redirect.
//!
//! A handler queues a [`Flash`] before redirecting and the next rendered page
//! takes it out of the session and shows it once.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::middleware::session_keys;

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
}

/// A notice shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub title: String,
    pub message: String,
}

impl Flash {
    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    /// CSS modifier for the notice banner.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.kind {
            FlashKind::Success => "notice--success",
            FlashKind::Error => "notice--error",
        }
    }
}

/// Queue a notice for the next page.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn push(session: &Session, flash: Flash) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::FLASH, flash).await
}

/// Take the queued notice, if any.
///
/// Session store failures are logged and treated as "no notice".
pub async fn take(session: &Session) -> Option<Flash> {
    match session.remove::<Flash>(session_keys::FLASH).await {
        Ok(flash) => flash,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read flash notice from session");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    #[tokio::test]
    async fn test_flash_is_taken_once() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        push(&session, Flash::success("Logged out", "Bye")).await.unwrap();

        let flash = take(&session).await.unwrap();
        assert_eq!(flash.title, "Logged out");
        assert_eq!(flash.css_class(), "notice--success");
        assert!(take(&session).await.is_none());
    }

    #[test]
    fn test_error_flash_title() {
        let flash = Flash::error("Failed to fetch blog post.");
        assert_eq!(flash.title, "Error");
        assert_eq!(flash.kind, FlashKind::Error);
    }
}
