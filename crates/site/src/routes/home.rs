//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use super::blog::{PostCard, published_cards};
use crate::content::{self, Feature, Review};
use crate::filters;
use crate::forms::ContactForm;
use crate::state::AppState;

/// Number of posts in the "latest insights" section.
const LATEST_POSTS_COUNT: usize = 3;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub why_us: &'static [Feature],
    pub services: &'static [Feature],
    pub reviews: &'static [Review],
    /// `None` hides the section.
    pub latest_posts: Option<Vec<PostCard>>,
    pub contact: ContactForm,
}

/// Display the home page.
///
/// The latest-posts section is hidden when the backend call fails.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let latest_posts = match state.backend().list_posts().await {
        Ok(posts) => {
            let mut cards = published_cards(&posts);
            cards.truncate(LATEST_POSTS_COUNT);
            Some(cards).filter(|cards| !cards.is_empty())
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load latest blog posts");
            None
        }
    };

    HomeTemplate {
        why_us: content::WHY_US,
        services: content::SERVICES,
        reviews: content::REVIEWS,
        latest_posts,
        contact: ContactForm::default(),
    }
}
