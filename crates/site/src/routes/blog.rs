//! Public blog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::instrument;

use possystem_core::{BlogPost, PostId};

use super::display_date;
use crate::filters;
use crate::state::AppState;

/// Post summary for listings.
#[derive(Debug, Clone)]
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub date: String,
    pub image_url: String,
}

impl From<&BlogPost> for PostCard {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: urlencoding::encode(post.id.as_str()).into_owned(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone().unwrap_or_default(),
            category: post.category_or_default().to_string(),
            date: display_date(post.created()),
            image_url: image_url(post),
        }
    }
}

/// Full post for the detail page.
#[derive(Debug, Clone)]
pub struct PostView {
    pub title: String,
    pub excerpt: String,
    /// Trusted HTML from the admin editor, rendered unescaped.
    pub content_html: String,
    pub category: String,
    pub author: String,
    pub date: String,
    pub image_url: String,
}

impl From<&BlogPost> for PostView {
    fn from(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone().unwrap_or_default(),
            content_html: post.content.clone().unwrap_or_default(),
            category: post.category_or_default().to_string(),
            author: post.author_name().to_string(),
            date: display_date(post.created()),
            image_url: image_url(post),
        }
    }
}

/// Featured image, or the stock image for the post's category.
fn image_url(post: &BlogPost) -> String {
    post.featured_image().map_or_else(
        || format!("/static/images/{}.svg", post.category_image()),
        str::to_string,
    )
}

/// Public posts as listing cards, in backend order.
pub(crate) fn published_cards(posts: &[BlogPost]) -> Vec<PostCard> {
    posts
        .iter()
        .filter(|post| post.is_published())
        .map(PostCard::from)
        .collect()
}

/// Blog index page template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/index.html")]
pub struct BlogIndexTemplate {
    pub posts: Vec<PostCard>,
    pub error: Option<String>,
}

/// Blog post detail template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/show.html")]
pub struct BlogShowTemplate {
    pub post: PostView,
}

/// Shown for any post that cannot be loaded.
#[derive(Template, WebTemplate)]
#[template(path = "blog/not_found.html")]
pub struct BlogNotFoundTemplate;

/// Display the blog index page.
///
/// A backend failure renders an empty list with a notice.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    match state.backend().list_posts().await {
        Ok(posts) => BlogIndexTemplate {
            posts: published_cards(&posts),
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load blog posts");
            BlogIndexTemplate {
                posts: Vec::new(),
                error: Some("Blog posts are unavailable right now. Please check back soon.".to_string()),
            }
        }
    }
}

/// Display a single blog post.
///
/// Any failure to load the post renders the not-found page with status 404.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.backend().get_post(&PostId::new(id), None).await {
        Ok(post) => BlogShowTemplate {
            post: PostView::from(&post),
        }
        .into_response(),
        Err(e) => {
            tracing::info!(error = %e, "Blog post unavailable");
            (StatusCode::NOT_FOUND, BlogNotFoundTemplate).into_response()
        }
    }
}

/// Create the blog routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/{id}", get(show))
}
