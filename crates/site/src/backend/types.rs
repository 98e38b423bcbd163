//! Response envelopes used by the backend.
//!
//! Collection keys the backend omits or sends as `null` are read as empty.

use serde::Deserialize;

use possystem_core::{BlogPost, ContactMessage, Subscriber};

/// Error body sent with non-success responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /api/blog/posts`
#[derive(Debug, Default, Deserialize)]
pub struct BlogPostsEnvelope {
    #[serde(default, rename = "blogPosts")]
    pub blog_posts: Option<Vec<BlogPost>>,
}

/// `GET /api/blog/posts/{id}`
#[derive(Debug, Default, Deserialize)]
pub struct BlogPostEnvelope {
    #[serde(default, rename = "blogPost")]
    pub blog_post: Option<BlogPost>,
}

/// `GET /api/contact`
#[derive(Debug, Default, Deserialize)]
pub struct MessagesEnvelope {
    #[serde(default)]
    pub messages: Option<Vec<ContactMessage>>,
}

/// `GET /api/subscriptions`
#[derive(Debug, Default, Deserialize)]
pub struct SubscriptionsEnvelope {
    #[serde(default)]
    pub subscriptions: Option<Vec<Subscriber>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_collection_is_empty() {
        let env: BlogPostsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(env.blog_posts.unwrap_or_default().is_empty());

        let env: MessagesEnvelope = serde_json::from_str(r#"{"messages":null}"#).unwrap();
        assert!(env.messages.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_subscriptions_envelope() {
        let json = r#"{"subscriptions":[{"_id":"s1","email":"x@y.com","createdAt":"2024-01-01T00:00:00Z"}],"count":1}"#;
        let env: SubscriptionsEnvelope = serde_json::from_str(json).unwrap();
        let subs = env.subscriptions.unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].email, "x@y.com");
    }

    #[test]
    fn test_error_body_without_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert!(body.message.is_none());
    }
}
