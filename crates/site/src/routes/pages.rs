//! Static marketing pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, response::IntoResponse, routing::get};

use crate::content::{self, Faq, Feature, Plan, Review};
use crate::filters;
use crate::state::AppState;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub why_us: &'static [Feature],
}

/// Services page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/services.html")]
pub struct ServicesTemplate {
    pub services: &'static [Feature],
}

/// Reviews page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/reviews.html")]
pub struct ReviewsTemplate {
    pub reviews: &'static [Review],
}

/// Pricing page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/pricing.html")]
pub struct PricingTemplate {
    pub plans: &'static [Plan],
    pub faqs: &'static [Faq],
}

/// GET /about
pub async fn about() -> impl IntoResponse {
    AboutTemplate {
        why_us: content::WHY_US,
    }
}

/// GET /services
pub async fn services() -> impl IntoResponse {
    ServicesTemplate {
        services: content::SERVICES,
    }
}

/// GET /reviews
pub async fn reviews() -> impl IntoResponse {
    ReviewsTemplate {
        reviews: content::REVIEWS,
    }
}

/// GET /pricing
pub async fn pricing() -> impl IntoResponse {
    PricingTemplate {
        plans: content::PLANS,
        faqs: content::FAQS,
    }
}

/// Create the static page routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/about", get(about))
        .route("/services", get(services))
        .route("/reviews", get(reviews))
        .route("/pricing", get(pricing))
}
