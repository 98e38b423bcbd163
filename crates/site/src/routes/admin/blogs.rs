//! Admin blog post handlers: list, create and edit.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use possystem_core::{BlogPost, PostId};

use super::{AdminChrome, session_expired};
use crate::error::add_breadcrumb;
use crate::filters;
use crate::flash::{self, Flash};
use crate::forms::BlogPostForm;
use crate::middleware::AdminSession;
use crate::routes::display_date;
use crate::state::AppState;

const LIST_PATH: &str = "/auth/dashboard/blogs";
const CREATE_PATH: &str = "/auth/dashboard/blogs/create";

/// A row of the blog post table.
#[derive(Debug, Clone)]
pub struct BlogRow {
    /// URL-encoded, ready for the edit link.
    pub id: String,
    pub title: String,
    pub date: String,
    pub category: String,
    pub published: bool,
}

impl BlogRow {
    #[must_use]
    pub const fn status(&self) -> &'static str {
        if self.published { "Published" } else { "Draft" }
    }
}

impl From<&BlogPost> for BlogRow {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: urlencoding::encode(post.id.as_str()).into_owned(),
            title: post.title.clone(),
            date: display_date(post.created()),
            category: post.category_or_default().to_string(),
            published: post.is_published(),
        }
    }
}

/// Blog post table template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/blogs.html")]
pub struct BlogListTemplate {
    pub chrome: AdminChrome,
    pub rows: Vec<BlogRow>,
    pub error: Option<String>,
}

/// Shared editor for create and edit.
#[derive(Template, WebTemplate)]
#[template(path = "admin/blog_form.html")]
pub struct BlogFormTemplate {
    pub chrome: AdminChrome,
    pub heading: &'static str,
    pub action: String,
    pub submit_label: &'static str,
    pub form: BlogPostForm,
    pub error: Option<String>,
    /// Confirmation dialog title after a successful save.
    pub saved: Option<&'static str>,
}

impl BlogFormTemplate {
    fn create(chrome: AdminChrome, form: BlogPostForm) -> Self {
        Self {
            chrome,
            heading: "Create New Blog Post",
            action: CREATE_PATH.to_string(),
            submit_label: "Create Post",
            form,
            error: None,
            saved: None,
        }
    }

    fn edit(chrome: AdminChrome, id: &PostId, form: BlogPostForm) -> Self {
        Self {
            chrome,
            heading: "Edit Blog Post",
            action: edit_path(id),
            submit_label: "Update Post",
            form,
            error: None,
            saved: None,
        }
    }
}

fn edit_path(id: &PostId) -> String {
    format!("/auth/dashboard/blogs/edit/{}", urlencoding::encode(id.as_str()))
}

/// Display every post the backend returns.
///
/// GET /auth/dashboard/blogs
#[instrument(skip(state, admin))]
pub async fn index(State(state): State<AppState>, admin: AdminSession) -> Response {
    let (rows, error) = match state.backend().list_posts_as(admin.token()).await {
        Ok(posts) => (posts.iter().map(BlogRow::from).collect(), None),
        Err(e) if e.is_unauthorized() => return session_expired(&admin).await,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch blog posts");
            (Vec::new(), Some(e.user_message("Failed to fetch blog posts.")))
        }
    };

    BlogListTemplate {
        chrome: AdminChrome::load(&admin, LIST_PATH).await,
        rows,
        error,
    }
    .into_response()
}

/// Blank editor.
///
/// GET /auth/dashboard/blogs/create
#[instrument(skip(admin))]
pub async fn new_form(admin: AdminSession) -> impl IntoResponse {
    BlogFormTemplate::create(
        AdminChrome::load(&admin, CREATE_PATH).await,
        BlogPostForm::default(),
    )
}

/// Create a post.
///
/// POST /auth/dashboard/blogs/create
///
/// On success the editor is reset and a confirmation dialog shown. On
/// failure the submitted values stay in the form.
#[instrument(skip(state, admin, fields))]
pub async fn create(
    State(state): State<AppState>,
    admin: AdminSession,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let form = BlogPostForm::from_submission(fields);
    let payload = form.to_create_payload();

    match state.backend().create_post(admin.token(), &payload).await {
        Ok(()) => {
            tracing::info!(title = %payload.title, "Blog post created");
            add_breadcrumb("blog", &format!("Created post: {}", payload.title));
            let mut page = BlogFormTemplate::create(
                AdminChrome::load(&admin, CREATE_PATH).await,
                BlogPostForm::default(),
            );
            page.saved = Some("Blog Post Created Successfully!");
            page.into_response()
        }
        Err(e) if e.is_unauthorized() => session_expired(&admin).await,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create blog post");
            let mut page =
                BlogFormTemplate::create(AdminChrome::load(&admin, CREATE_PATH).await, form);
            page.error = Some(e.user_message("Failed to create blog post."));
            (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
        }
    }
}

/// Editor pre-filled from a stored post.
///
/// GET /auth/dashboard/blogs/edit/{id}
///
/// A post that cannot be loaded sends the admin back to the list with an
/// error notice.
#[instrument(skip(state, admin))]
pub async fn edit_form(
    State(state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<String>,
) -> Response {
    let id = PostId::new(id);
    match state.backend().get_post(&id, Some(admin.token())).await {
        Ok(post) => {
            let path = edit_path(&id);
            BlogFormTemplate::edit(
                AdminChrome::load(&admin, &path).await,
                &id,
                BlogPostForm::from(&post),
            )
            .into_response()
        }
        Err(e) if e.is_unauthorized() => session_expired(&admin).await,
        Err(e) => {
            tracing::warn!(error = %e, post_id = %id, "Failed to fetch blog post");
            if let Err(e) = flash::push(
                admin.session(),
                Flash::error(e.generic_message("Failed to fetch blog post.")),
            )
            .await
            {
                tracing::warn!(error = %e, "Failed to queue error notice");
            }
            Redirect::to(LIST_PATH).into_response()
        }
    }
}

/// Update a post.
///
/// POST /auth/dashboard/blogs/edit/{id}
#[instrument(skip(state, admin, fields))]
pub async fn update(
    State(state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<String>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let id = PostId::new(id);
    let form = BlogPostForm::from_submission(fields);
    let payload = form.to_update_payload();
    let path = edit_path(&id);

    match state.backend().update_post(admin.token(), &id, &payload).await {
        Ok(()) => {
            tracing::info!(post_id = %id, "Blog post updated");
            add_breadcrumb("blog", &format!("Updated post: {id}"));
            let mut page = BlogFormTemplate::edit(AdminChrome::load(&admin, &path).await, &id, form);
            page.saved = Some("Blog Post Updated Successfully!");
            page.into_response()
        }
        Err(e) if e.is_unauthorized() => session_expired(&admin).await,
        Err(e) => {
            tracing::error!(error = %e, post_id = %id, "Failed to update blog post");
            let mut page = BlogFormTemplate::edit(AdminChrome::load(&admin, &path).await, &id, form);
            page.error = Some(e.user_message("Failed to update blog post."));
            (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
        }
    }
}
