//! Blog post endpoints.

use reqwest::Method;
use secrecy::SecretString;
use tracing::instrument;

use possystem_core::{BlogPost, CreatePostPayload, PostId, UpdatePostPayload};

use super::{BackendClient, BackendError, BlogPostEnvelope, BlogPostsEnvelope};

impl BackendClient {
    /// Fetch every blog post.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a post list.
    #[instrument(skip(self))]
    pub async fn list_posts(&self) -> Result<Vec<BlogPost>, BackendError> {
        let envelope: BlogPostsEnvelope = self.get("/api/blog/posts", None).await?;
        Ok(envelope.blog_posts.unwrap_or_default())
    }

    /// Fetch every blog post on behalf of an admin.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a post list.
    #[instrument(skip_all)]
    pub async fn list_posts_as(&self, token: &SecretString) -> Result<Vec<BlogPost>, BackendError> {
        let envelope: BlogPostsEnvelope = self.get("/api/blog/posts", Some(token)).await?;
        Ok(envelope.blog_posts.unwrap_or_default())
    }

    /// Fetch one blog post.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the backend has no such post, including a success
    /// response without a `blogPost` key.
    #[instrument(skip(self, token), fields(post_id = %id))]
    pub async fn get_post(
        &self,
        id: &PostId,
        token: Option<&SecretString>,
    ) -> Result<BlogPost, BackendError> {
        let path = format!("/api/blog/posts/{}", urlencoding::encode(id.as_str()));
        let envelope: BlogPostEnvelope = self.get(&path, token).await?;
        envelope
            .blog_post
            .ok_or(BackendError::NotFound { message: None })
    }

    /// Create a blog post.
    ///
    /// # Errors
    ///
    /// Returns error if the backend rejects the post or cannot be reached.
    #[instrument(skip(self, token, payload), fields(title = %payload.title))]
    pub async fn create_post(
        &self,
        token: &SecretString,
        payload: &CreatePostPayload,
    ) -> Result<(), BackendError> {
        self.send_json(Method::POST, "/api/blog/dashboard/blog", Some(token), payload)
            .await
    }

    /// Replace a blog post.
    ///
    /// # Errors
    ///
    /// Returns error if the backend rejects the update or cannot be reached.
    #[instrument(skip(self, token, payload), fields(post_id = %id))]
    pub async fn update_post(
        &self,
        token: &SecretString,
        id: &PostId,
        payload: &UpdatePostPayload,
    ) -> Result<(), BackendError> {
        let path = format!("/api/blog/posts/{}", urlencoding::encode(id.as_str()));
        self.send_json(Method::PUT, &path, Some(token), payload).await
    }
}
